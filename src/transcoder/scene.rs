//! Movie-to-scene transformation: the decoded movie document is flattened
//! into the renderer-ready Video format.

use std::collections::{BTreeMap, HashMap};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::debug;

use crate::decoder::schema::{MovieEntity, ShapeType, SpriteEntity};
use crate::transcoder::convert::{convert_layout, convert_shapes, convert_transform};
use crate::transcoder::types::{
    SceneDocument, SceneSize, VideoFrame, VideoLayout, VideoMaskPath, VideoShape, VideoSprite,
    VideoStyles, VideoTransform,
};

/// Frame rate used when the movie declares none (or zero)
const DEFAULT_FPS: i32 = 20;

/// Version string used when the movie declares none
const DEFAULT_VERSION: &str = "2.0";

/// Flatten a decoded movie into a renderer-ready scene document.
///
/// Pure and deterministic: the same movie always produces the same scene.
pub fn movie_to_scene(movie: &MovieEntity) -> SceneDocument {
    let params = movie.params.clone().unwrap_or_default();

    let images = extract_images(&movie.images);
    let sprites: Vec<VideoSprite> = movie.sprites.iter().map(convert_sprite).collect();

    debug!(
        sprites = sprites.len(),
        images = images.len(),
        "converted movie to scene document"
    );

    SceneDocument {
        version: match movie.version.as_deref() {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => DEFAULT_VERSION.to_string(),
        },
        size: SceneSize {
            width: params.view_box_width.unwrap_or(0.0),
            height: params.view_box_height.unwrap_or(0.0),
        },
        fps: match params.fps {
            Some(fps) if fps != 0 => fps,
            _ => DEFAULT_FPS,
        },
        frames: params.frames.unwrap_or(0),
        images,
        replace_elements: BTreeMap::new(),
        dynamic_elements: BTreeMap::new(),
        sprites,
    }
}

/// Resolve one sprite's frames in order, carrying the last resolved shape
/// list across frames of this sprite only.
fn convert_sprite(sprite: &SpriteEntity) -> VideoSprite {
    let mut prev_shapes: Option<Vec<VideoShape>> = None;
    let mut frames = Vec::with_capacity(sprite.frames.len());

    for frame in &sprite.frames {
        let alpha = frame.alpha.unwrap_or(0.0);
        let layout = convert_layout(frame.layout.as_ref());
        let transform = convert_transform(frame.transform.as_ref());
        let clip_path = frame.clip_path.clone().unwrap_or_default();

        // A leading KEEP shape reuses the previous frame's resolved list.
        // With no previous frame the KEEP entry converts to nothing, so the
        // frame resolves to an empty list.
        let is_keep = frame
            .shapes
            .first()
            .is_some_and(|s| s.shape_type == ShapeType::Keep as i32);

        let shapes = match (&prev_shapes, is_keep) {
            (Some(prev), true) => prev.clone(),
            _ => {
                let converted = convert_shapes(&frame.shapes);
                prev_shapes = Some(converted.clone());
                converted
            }
        };

        let (nx, ny) = transformed_origin(&layout, &transform);

        let mask_path = if clip_path.is_empty() {
            None
        } else {
            Some(mask_from_clip(&clip_path))
        };

        frames.push(VideoFrame {
            alpha,
            layout,
            transform,
            clip_path,
            shapes,
            nx,
            ny,
            mask_path,
        });
    }

    VideoSprite {
        image_key: sprite.image_key.clone().unwrap_or_default(),
        frames,
    }
}

/// Minimum x/y over the four layout corners mapped through the affine
/// transform `(x', y') = (a·x + c·y + tx, b·x + d·y + ty)`.
fn transformed_origin(layout: &VideoLayout, t: &VideoTransform) -> (f32, f32) {
    let corners = [
        (layout.x, layout.y),
        (layout.x + layout.width, layout.y),
        (layout.x, layout.y + layout.height),
        (layout.x + layout.width, layout.y + layout.height),
    ];

    let mut nx = f32::INFINITY;
    let mut ny = f32::INFINITY;
    for (x, y) in corners {
        nx = nx.min(t.a * x + t.c * y + t.tx);
        ny = ny.min(t.b * x + t.d * y + t.ty);
    }

    (nx, ny)
}

/// Build the clip mask for a frame: transparent fill, no stroke attributes,
/// no transform.
fn mask_from_clip(clip_path: &str) -> VideoMaskPath {
    VideoMaskPath {
        d: clip_path.to_string(),
        transform: None,
        styles: VideoStyles {
            fill: Some("rgba(0, 0, 0, 0)".to_string()),
            stroke: None,
            stroke_width: None,
            line_cap: None,
            line_join: None,
            miter_limit: None,
            line_dash: None,
        },
    }
}

/// Base64-encode all non-empty image payloads. Empty or absent payloads are
/// omitted from the output map.
fn extract_images(images: &HashMap<String, Vec<u8>>) -> BTreeMap<String, String> {
    images
        .iter()
        .filter(|(_, bytes)| !bytes.is_empty())
        .map(|(key, bytes)| (key.clone(), BASE64.encode(bytes)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::schema::{
        shape_entity::Args, FrameEntity, Layout, MovieParams, RectArgs, ShapeArgs, ShapeEntity,
        ShapeStyle, Transform,
    };

    fn path_shape(d: &str) -> ShapeEntity {
        ShapeEntity {
            shape_type: ShapeType::Shape as i32,
            styles: Some(ShapeStyle::default()),
            transform: None,
            args: Some(Args::Shape(ShapeArgs { d: Some(d.to_string()) })),
        }
    }

    fn keep_shape() -> ShapeEntity {
        ShapeEntity {
            shape_type: ShapeType::Keep as i32,
            styles: None,
            transform: None,
            args: None,
        }
    }

    fn frame_with_shapes(shapes: Vec<ShapeEntity>) -> FrameEntity {
        FrameEntity {
            alpha: Some(1.0),
            layout: None,
            transform: None,
            clip_path: None,
            shapes,
        }
    }

    #[test]
    fn keep_reuses_previous_frame_shapes() {
        let sprite = SpriteEntity {
            image_key: Some("layer0".to_string()),
            frames: vec![
                frame_with_shapes(vec![path_shape("M0 0 L10 10")]),
                frame_with_shapes(vec![keep_shape()]),
                frame_with_shapes(vec![keep_shape()]),
            ],
        };

        let converted = convert_sprite(&sprite);
        assert_eq!(converted.frames.len(), 3);
        assert_eq!(converted.frames[0].shapes.len(), 1);
        assert_eq!(converted.frames[1].shapes, converted.frames[0].shapes);
        assert_eq!(converted.frames[2].shapes, converted.frames[0].shapes);
    }

    #[test]
    fn leading_keep_resolves_to_empty_list() {
        let sprite = SpriteEntity {
            image_key: None,
            frames: vec![frame_with_shapes(vec![keep_shape()])],
        };

        let converted = convert_sprite(&sprite);
        assert!(converted.frames[0].shapes.is_empty());
    }

    #[test]
    fn keep_state_does_not_leak_across_sprites() {
        let movie = MovieEntity {
            sprites: vec![
                SpriteEntity {
                    image_key: Some("a".to_string()),
                    frames: vec![frame_with_shapes(vec![path_shape("M1 1")])],
                },
                SpriteEntity {
                    image_key: Some("b".to_string()),
                    frames: vec![frame_with_shapes(vec![keep_shape()])],
                },
            ],
            ..Default::default()
        };

        let scene = movie_to_scene(&movie);
        assert_eq!(scene.sprites[0].frames[0].shapes.len(), 1);
        assert!(scene.sprites[1].frames[0].shapes.is_empty());
    }

    #[test]
    fn identity_transform_origin_is_layout_origin() {
        let layout = VideoLayout { x: 10.0, y: 20.0, width: 30.0, height: 40.0 };
        let (nx, ny) = transformed_origin(&layout, &VideoTransform::default());
        assert_eq!((nx, ny), (10.0, 20.0));
    }

    #[test]
    fn negative_scale_moves_origin() {
        // Mirroring in x: the right edge becomes the leftmost point
        let layout = VideoLayout { x: 0.0, y: 0.0, width: 30.0, height: 40.0 };
        let t = VideoTransform { a: -1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };
        let (nx, ny) = transformed_origin(&layout, &t);
        assert_eq!((nx, ny), (-30.0, 0.0));
    }

    #[test]
    fn frame_transform_fields_default_per_component() {
        let sprite = SpriteEntity {
            image_key: None,
            frames: vec![FrameEntity {
                alpha: None,
                layout: Some(Layout {
                    x: Some(10.0),
                    y: Some(20.0),
                    width: Some(30.0),
                    height: Some(40.0),
                }),
                transform: Some(Transform { tx: Some(5.0), ..Default::default() }),
                clip_path: None,
                shapes: vec![],
            }],
        };

        let converted = convert_sprite(&sprite);
        let frame = &converted.frames[0];
        assert_eq!(frame.alpha, 0.0);
        assert_eq!(frame.transform.a, 1.0);
        assert_eq!((frame.nx, frame.ny), (15.0, 20.0));
    }

    #[test]
    fn clip_path_produces_mask() {
        let sprite = SpriteEntity {
            image_key: None,
            frames: vec![
                FrameEntity {
                    clip_path: Some("M0 0 H100 V100 H0 Z".to_string()),
                    ..frame_with_shapes(vec![])
                },
                frame_with_shapes(vec![]),
            ],
        };

        let converted = convert_sprite(&sprite);

        let mask = converted.frames[0].mask_path.as_ref().unwrap();
        assert_eq!(mask.d, "M0 0 H100 V100 H0 Z");
        assert_eq!(mask.styles.fill.as_deref(), Some("rgba(0, 0, 0, 0)"));
        assert!(mask.transform.is_none());
        assert!(mask.styles.line_dash.is_none());

        assert!(converted.frames[1].mask_path.is_none());
    }

    #[test]
    fn image_extraction_skips_empty_payloads() {
        let movie = MovieEntity {
            images: [
                ("img0".to_string(), vec![0x89, 0x50, 0x4e, 0x47]),
                ("empty".to_string(), vec![]),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        };

        let scene = movie_to_scene(&movie);
        assert_eq!(scene.images.len(), 1);
        assert_eq!(scene.images["img0"], BASE64.encode([0x89, 0x50, 0x4e, 0x47]));
        assert!(!scene.images.contains_key("empty"));
    }

    #[test]
    fn document_defaults() {
        let scene = movie_to_scene(&MovieEntity::default());
        assert_eq!(scene.version, "2.0");
        assert_eq!(scene.fps, 20);
        assert_eq!(scene.frames, 0);
        assert_eq!(scene.size.width, 0.0);
        assert_eq!(scene.size.height, 0.0);

        // fps = 0 also falls back to the default
        let movie = MovieEntity {
            params: Some(MovieParams { fps: Some(0), ..Default::default() }),
            ..Default::default()
        };
        assert_eq!(movie_to_scene(&movie).fps, 20);
    }

    #[test]
    fn rect_payload_on_keep_type_is_not_rendered() {
        // A KEEP-typed entry carrying stray geometry still acts as KEEP, and
        // converting it directly yields nothing.
        let stray = ShapeEntity {
            shape_type: ShapeType::Keep as i32,
            styles: Some(ShapeStyle::default()),
            transform: None,
            args: Some(Args::Rect(RectArgs::default())),
        };
        assert!(convert_shapes(&[stray]).is_empty());
    }
}
