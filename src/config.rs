use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for the SVGA transcoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Decoder settings
    pub decoder: DecoderConfig,

    /// Output artifact settings
    pub output: OutputConfig,

    /// Pipeline execution settings
    pub pipeline: PipelineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decoder: DecoderConfig::default(),
            output: OutputConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string(),
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.decoder.validate()?;
        self.pipeline.validate()?;
        Ok(())
    }
}

/// Decoder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Maximum compressed input size in bytes. Inputs above this are
    /// rejected before decompression.
    pub max_input_bytes: u64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            // Real SVGA animations are a few MB at most
            max_input_bytes: 64 * 1024 * 1024,
        }
    }
}

impl DecoderConfig {
    fn validate(&self) -> Result<()> {
        if self.max_input_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "decoder.max_input_bytes".to_string(),
                value: self.max_input_bytes.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Output artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the scene JSON instead of the compact canonical form
    pub pretty: bool,

    /// Write extracted sprite images alongside the scene document
    pub write_images: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            write_images: true,
        }
    }
}

/// Pipeline execution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum number of input files processed concurrently
    pub max_parallel: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_parallel: num_cpus::get(),
        }
    }
}

impl PipelineConfig {
    fn validate(&self) -> Result<()> {
        if self.max_parallel == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pipeline.max_parallel".to_string(),
                value: self.max_parallel.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
