//! # Transcode Pipeline
//!
//! Orchestrates the full decode-and-publish flow for one or more SVGA files:
//! read input, decode the container, transcode to a scene document, write
//! artifacts, and report summary statistics.

pub mod engine;

pub use engine::{ProcessSummary, TranscodePipeline};
