use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Renderer-ready scene document in the player "Video" format.
///
/// This is the durable artifact handed to a playback engine; once written it
/// is never mutated. The image map is a `BTreeMap` so serializing the same
/// movie twice produces byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    pub version: String,
    pub size: SceneSize,
    pub fps: i32,
    pub frames: i32,

    /// Base64-encoded sprite images keyed by image name
    pub images: BTreeMap<String, String>,

    // Player-format slots for runtime element substitution; always empty
    // here, but part of the mount contract.
    pub replace_elements: BTreeMap<String, serde_json::Value>,
    pub dynamic_elements: BTreeMap<String, serde_json::Value>,

    pub sprites: Vec<VideoSprite>,
}

/// Canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneSize {
    pub width: f32,
    pub height: f32,
}

/// One animated layer with fully resolved keyframes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSprite {
    pub image_key: String,
    pub frames: Vec<VideoFrame>,
}

/// One resolved keyframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFrame {
    pub alpha: f32,
    pub layout: VideoLayout,
    pub transform: VideoTransform,
    pub clip_path: String,
    pub shapes: Vec<VideoShape>,

    /// Top-left corner of the layout rectangle after the frame transform
    pub nx: f32,
    pub ny: f32,

    /// Clip mask, or `null` when the frame has no clip path
    pub mask_path: Option<VideoMaskPath>,
}

/// Local bounding box (missing source fields default to 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// 2D affine transform (missing source fields default to identity)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoTransform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for VideoTransform {
    fn default() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 }
    }
}

/// A resolved vector shape, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VideoShape {
    Shape {
        path: ShapePath,
        styles: VideoStyles,
        transform: VideoTransform,
    },
    Rect {
        path: RectPath,
        styles: VideoStyles,
        transform: VideoTransform,
    },
    Ellipse {
        path: EllipsePath,
        styles: VideoStyles,
        transform: VideoTransform,
    },
}

impl VideoShape {
    pub fn styles(&self) -> &VideoStyles {
        match self {
            Self::Shape { styles, .. } | Self::Rect { styles, .. } | Self::Ellipse { styles, .. } => {
                styles
            }
        }
    }
}

/// Raw SVG-style path data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePath {
    pub d: String,
}

/// Rectangle geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectPath {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

/// Ellipse geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EllipsePath {
    pub x: f32,
    pub y: f32,
    pub radius_x: f32,
    pub radius_y: f32,
}

/// Normalized CSS-style shape attributes.
///
/// Absent attributes serialize as `null`, matching what existing renderers
/// expect. `line_dash` is an (possibly empty) array on regular shapes and
/// `null` on mask styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStyles {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f32>,
    pub line_cap: Option<String>,
    pub line_join: Option<String>,
    pub miter_limit: Option<f32>,
    pub line_dash: Option<Vec<f32>>,
}

/// Clip mask carried by a frame with a non-empty clip path.
///
/// The mask never carries a transform; the key is omitted from the JSON
/// entirely rather than serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMaskPath {
    pub d: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transform: Option<VideoTransform>,

    pub styles: VideoStyles,
}
