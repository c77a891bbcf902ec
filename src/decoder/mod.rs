//! # SVGA Decoder Module
//!
//! Turns a raw `.svga` byte buffer into a structured [`MovieEntity`].
//!
//! Decoding is a two-stage pass: the container layer sniffs the format
//! version and inflates the zlib stream, then the movie bytes are decoded
//! against the fixed SVGA v2 protobuf schema. The legacy ZIP-based v1
//! container is rejected outright.

pub mod container;
pub mod schema;

use prost::Message;

use crate::error::{DecodeError, Result};

pub use container::{decompress, detect_version, ContainerVersion};
pub use schema::{
    FrameEntity, Layout, MovieEntity, MovieParams, RgbaColor, ShapeEntity, ShapeStyle, ShapeType,
    SpriteEntity, Transform,
};

/// Decode a raw SVGA v2 file buffer into a movie document.
pub fn decode(raw: &[u8]) -> Result<MovieEntity> {
    let movie_bytes = container::decompress(raw)?;

    let movie = MovieEntity::decode(movie_bytes.as_slice())
        .map_err(|e| DecodeError::MalformedMovieData { reason: e.to_string() })?;

    Ok(movie)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    use super::*;
    use crate::error::SvgaError;

    fn compress_movie(movie: &MovieEntity) -> Vec<u8> {
        let bytes = movie.encode_to_vec();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn decodes_a_compressed_movie() {
        let movie = MovieEntity {
            version: Some("2.0".to_string()),
            params: Some(MovieParams {
                view_box_width: Some(300.0),
                view_box_height: Some(300.0),
                fps: Some(24),
                frames: Some(48),
            }),
            ..Default::default()
        };

        let decoded = decode(&compress_movie(&movie)).unwrap();
        assert_eq!(decoded, movie);
    }

    #[test]
    fn malformed_movie_bytes_fail_structurally() {
        // Valid zlib stream wrapping bytes that are not a MovieEntity:
        // a length-delimited field (tag 4) whose length runs past the buffer.
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0x22, 0x7f, 0x01]).unwrap();
        let compressed = encoder.finish().unwrap();

        let err = decode(&compressed).unwrap_err();
        assert!(matches!(
            err,
            SvgaError::Decode(DecodeError::MalformedMovieData { .. })
        ));
    }
}
