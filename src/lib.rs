//! # SVGA Transcoder
//!
//! Decode SVGA v2 vector-animation archives and transcode them into
//! flattened, renderer-ready scene documents.
//!
//! An SVGA v2 file is a zlib-compressed protobuf movie: raster sprite images
//! plus per-frame vector shapes and affine transforms. This library inflates
//! the container, decodes the movie against the fixed binary schema, and
//! flattens it into the player "Video" format — KEEP frames resolved, styles
//! normalized to CSS-like attributes, transformed bounding-box origins
//! computed, and images emitted as base64.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use svga_transcoder::{config::Config, pipeline::TranscodePipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let pipeline = TranscodePipeline::new(Config::default());
//! let summary = pipeline
//!     .process_file("animation.svga".as_ref(), "output".as_ref(), None)
//!     .await?;
//! println!("{} frames @ {}fps", summary.frames, summary.fps);
//! # Ok(())
//! # }
//! ```
//!
//! Callers that already hold file bytes can use the pure transform directly:
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! let raw = std::fs::read("animation.svga")?;
//! let scene = svga_transcoder::transcoder::transcode(&raw)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`decoder`] - container version detection, decompression, and
//!   schema-bound decoding into a movie document
//! - [`transcoder`] - movie-to-scene transformation
//! - [`output`] - scene document and image artifact writing
//! - [`pipeline`] - end-to-end orchestration and batch processing
//! - [`config`] - configuration management

pub mod config;
pub mod decoder;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod transcoder;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{DecodeError, OutputError, Result, SvgaError},
    pipeline::{ProcessSummary, TranscodePipeline},
    transcoder::SceneDocument,
};
