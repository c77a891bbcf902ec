//! # Scene Transcoder Module
//!
//! Transforms a decoded SVGA movie into the flattened, renderer-ready
//! "Video" scene format: per-frame vector shapes resolved (including KEEP
//! reuse of the previous frame), styles normalized to CSS-like attributes,
//! transformed bounding-box origins computed, and sprite image payloads
//! emitted as base64 strings.

pub mod convert;
pub mod scene;
pub mod types;

use crate::error::Result;

pub use scene::movie_to_scene;
pub use types::{
    EllipsePath, RectPath, SceneDocument, SceneSize, ShapePath, VideoFrame, VideoLayout,
    VideoMaskPath, VideoShape, VideoSprite, VideoStyles, VideoTransform,
};

/// Decode a raw SVGA v2 buffer and transcode it into a scene document in one
/// step. This is the library entry point for callers that hold file bytes.
pub fn transcode(raw: &[u8]) -> Result<SceneDocument> {
    let movie = crate::decoder::decode(raw)?;
    Ok(movie_to_scene(&movie))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use prost::Message;

    use super::*;
    use crate::decoder::schema::{
        shape_entity::Args, FrameEntity, Layout, MovieEntity, MovieParams, ShapeArgs, ShapeEntity,
        ShapeStyle, ShapeType, SpriteEntity,
    };

    fn sample_movie() -> MovieEntity {
        MovieEntity {
            version: Some("2.0".to_string()),
            params: Some(MovieParams {
                view_box_width: Some(100.0),
                view_box_height: Some(100.0),
                fps: Some(30),
                frames: Some(2),
            }),
            images: [("img0".to_string(), vec![1u8, 2, 3, 4])].into_iter().collect(),
            sprites: vec![SpriteEntity {
                image_key: Some("img0".to_string()),
                frames: vec![
                    FrameEntity {
                        alpha: Some(1.0),
                        layout: Some(Layout {
                            x: Some(0.0),
                            y: Some(0.0),
                            width: Some(100.0),
                            height: Some(100.0),
                        }),
                        transform: None,
                        clip_path: None,
                        shapes: vec![ShapeEntity {
                            shape_type: ShapeType::Shape as i32,
                            styles: Some(ShapeStyle::default()),
                            transform: None,
                            args: Some(Args::Shape(ShapeArgs { d: Some("M0 0 L1 1".to_string()) })),
                        }],
                    },
                    FrameEntity {
                        alpha: Some(1.0),
                        layout: None,
                        transform: None,
                        clip_path: None,
                        shapes: vec![ShapeEntity {
                            shape_type: ShapeType::Keep as i32,
                            styles: None,
                            transform: None,
                            args: None,
                        }],
                    },
                ],
            }],
        }
    }

    fn compress(movie: &MovieEntity) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&movie.encode_to_vec()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn transcode_end_to_end() {
        let raw = compress(&sample_movie());
        let scene = transcode(&raw).unwrap();

        assert_eq!(scene.version, "2.0");
        assert_eq!(scene.fps, 30);
        assert_eq!(scene.frames, 2);
        assert_eq!(scene.sprites.len(), 1);
        assert_eq!(scene.images.len(), 1);

        // KEEP frame got the first frame's resolved shapes
        let frames = &scene.sprites[0].frames;
        assert_eq!(frames[1].shapes, frames[0].shapes);
    }

    #[test]
    fn transcode_is_deterministic() {
        let raw = compress(&sample_movie());

        let a = serde_json::to_string(&transcode(&raw).unwrap()).unwrap();
        let b = serde_json::to_string(&transcode(&raw).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
