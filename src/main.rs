use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use svga_transcoder::{config::Config, pipeline::TranscodePipeline};

#[derive(Parser)]
#[command(
    name = "svga-transcoder",
    version,
    about = "Decode SVGA v2 animations into renderer-ready scene documents",
    long_about = "svga-transcoder inflates SVGA v2 archives, decodes the movie data and \
                  flattens it into the player-compatible Video JSON format, writing the scene \
                  document and extracted sprite images to an output directory."
)]
struct Cli {
    /// SVGA v2 input file(s)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (each animation gets its own subdirectory)
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,

    /// Artifact name (defaults to the input file stem; single input only)
    #[arg(short, long)]
    name: Option<String>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the scene JSON
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting svga-transcoder v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => Config::default(),
    };
    if cli.pretty {
        config.output.pretty = true;
    }
    config.validate()?;

    if cli.name.is_some() && cli.inputs.len() > 1 {
        anyhow::bail!("--name can only be used with a single input file");
    }

    let pipeline = TranscodePipeline::new(config);

    let summaries = if cli.inputs.len() == 1 {
        vec![
            pipeline
                .process_file(&cli.inputs[0], &cli.out_dir, cli.name.as_deref())
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?,
        ]
    } else {
        pipeline
            .process_batch(&cli.inputs, &cli.out_dir)
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?
    };

    for summary in &summaries {
        info!(
            "{:?}: {} frames @ {}fps, {}x{}, {} sprites, {} images -> {:?}",
            summary.input,
            summary.frames,
            summary.fps,
            summary.view_box_width,
            summary.view_box_height,
            summary.sprites,
            summary.images,
            summary.scene_path,
        );
    }

    info!("Done: {} file(s) processed", summaries.len());
    Ok(())
}
