//! SVGA container handling: format-version detection and decompression.

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::{DecodeError, Result};

/// ZIP local-file-header signature, the marker of the legacy SVGA v1 container
const ZIP_MAGIC: [u8; 2] = [0x50, 0x4b];

/// Container format version detected from the first bytes of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerVersion {
    /// Legacy ZIP-based container, not supported
    V1,
    /// zlib-compressed protobuf movie
    V2,
}

/// Detect the container version from the raw file bytes.
///
/// Anything that does not start with the ZIP magic is treated as version 2;
/// a corrupt non-ZIP buffer will fail later, during decompression.
pub fn detect_version(data: &[u8]) -> ContainerVersion {
    if data.len() >= 2 && data[..2] == ZIP_MAGIC {
        ContainerVersion::V1
    } else {
        ContainerVersion::V2
    }
}

/// Decompress a version-2 container into the raw movie byte stream.
///
/// Rejects the legacy ZIP container before touching the decompressor and
/// returns no partial output on a truncated or invalid stream.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if detect_version(data) == ContainerVersion::V1 {
        return Err(DecodeError::UnsupportedFormatVersion {
            detail: "ZIP local-file-header signature found (SVGA v1)".to_string(),
        }
        .into());
    }

    let mut decoder = ZlibDecoder::new(data);
    let mut buffer = Vec::new();
    decoder
        .read_to_end(&mut buffer)
        .map_err(|e| DecodeError::DecompressionFailed { reason: e.to_string() })?;

    Ok(buffer)
}
