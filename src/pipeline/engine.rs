use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DecodeError, Result, SvgaError};
use crate::output::ArtifactWriter;
use crate::transcoder;

/// Statistics returned after a file has been processed, mirroring what the
/// scene document declares plus the on-disk result.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    pub input: PathBuf,
    pub scene_path: PathBuf,
    pub frames: i32,
    pub fps: i32,
    pub view_box_width: f32,
    pub view_box_height: f32,
    pub sprites: usize,
    pub images: usize,
    pub json_bytes: usize,
}

/// Drives the decode → transcode → write pipeline.
///
/// The transform itself is pure and CPU-only; file I/O happens strictly
/// before and after it. Independent inputs share no mutable state, so a
/// batch runs them concurrently up to `pipeline.max_parallel` tasks.
pub struct TranscodePipeline {
    config: Config,
}

impl TranscodePipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Process a single SVGA file.
    ///
    /// Artifacts land in `<out_dir>/<name>/`, where `name` defaults to the
    /// input file stem: the scene document as `<name>.json` and each sprite
    /// image as `<key>.png`.
    pub async fn process_file(
        &self,
        input: &Path,
        out_dir: &Path,
        name: Option<&str>,
    ) -> Result<ProcessSummary> {
        let name = match name {
            Some(name) => name.to_string(),
            None => input
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    SvgaError::generic(format!("input path has no file name: {}", input.display()))
                })?,
        };

        info!("Processing {:?} -> {:?}", input, out_dir.join(&name));

        // Step 1: read the raw container
        let raw = tokio::fs::read(input).await?;
        debug!(bytes = raw.len(), "read input file");

        let limit = self.config.decoder.max_input_bytes;
        if raw.len() as u64 > limit {
            return Err(DecodeError::InputTooLarge { size: raw.len() as u64, limit }.into());
        }

        // Steps 2-3: decompress, decode and transcode (pure, non-suspending)
        let scene = transcoder::transcode(&raw)?;

        info!(
            "   Decoded: {} frames @ {}fps, {}x{}, {} sprites, {} images",
            scene.frames,
            scene.fps,
            scene.size.width,
            scene.size.height,
            scene.sprites.len(),
            scene.images.len()
        );

        // Step 4: write artifacts into a per-animation directory
        let dest = out_dir.join(&name);
        let writer = ArtifactWriter::new(self.config.output.clone());
        let report = writer.write(&scene, &dest, &name).await?;

        info!(
            "   Written: {:?} ({} bytes) plus {} image file(s)",
            report.scene_path,
            report.json_bytes,
            report.image_paths.len()
        );

        Ok(ProcessSummary {
            input: input.to_path_buf(),
            scene_path: report.scene_path,
            frames: scene.frames,
            fps: scene.fps,
            view_box_width: scene.size.width,
            view_box_height: scene.size.height,
            sprites: scene.sprites.len(),
            images: scene.images.len(),
            json_bytes: report.json_bytes,
        })
    }

    /// Process several inputs concurrently with a bounded number of tasks.
    ///
    /// Results come back in input order. The first failure aborts the batch.
    pub async fn process_batch(
        &self,
        inputs: &[PathBuf],
        out_dir: &Path,
    ) -> Result<Vec<ProcessSummary>> {
        info!(
            "Processing batch of {} file(s), up to {} in parallel",
            inputs.len(),
            self.config.pipeline.max_parallel
        );

        let semaphore = Arc::new(Semaphore::new(self.config.pipeline.max_parallel));
        let mut tasks = JoinSet::new();

        for (index, input) in inputs.iter().cloned().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let pipeline = TranscodePipeline::new(self.config.clone());
            let out_dir = out_dir.to_path_buf();

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|_| SvgaError::generic("pipeline semaphore closed"))?;
                let summary = pipeline.process_file(&input, &out_dir, None).await?;
                Ok::<_, SvgaError>((index, summary))
            });
        }

        let mut summaries: Vec<Option<ProcessSummary>> =
            inputs.iter().map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            let (index, summary) =
                joined.map_err(|e| SvgaError::generic(format!("pipeline task failed: {}", e)))??;
            summaries[index] = Some(summary);
        }

        Ok(summaries.into_iter().flatten().collect())
    }
}
