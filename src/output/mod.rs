//! # Artifact Output Module
//!
//! Persists a transcoded scene document and its extracted sprite images to
//! an output directory. Defines the on-disk contract consumed downstream:
//! one `<name>.json` scene document plus one `<key>.png` per image, raw
//! decoded bytes, no re-encoding.

pub mod writer;

pub use writer::{ArtifactWriter, WriteReport};
