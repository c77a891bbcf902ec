//! Hand-written prost message types for the SVGA v2 binary schema.
//!
//! The schema is fixed; expressing it as derive-annotated structs means it is
//! compiled once and shared by every decode call, with no per-call schema
//! construction. Unknown fields in the stream are skipped by prost, so newer
//! writers remain decodable.

use std::collections::HashMap;

use prost::{Enumeration, Message};

/// Top-level movie envelope
#[derive(Clone, PartialEq, Message)]
pub struct MovieEntity {
    /// SVGA format version, e.g. "2.0"
    #[prost(string, optional, tag = "1")]
    pub version: Option<String>,

    #[prost(message, optional, tag = "2")]
    pub params: Option<MovieParams>,

    /// Raster sprite payloads keyed by image name
    #[prost(map = "string, bytes", tag = "3")]
    pub images: HashMap<String, Vec<u8>>,

    #[prost(message, repeated, tag = "4")]
    pub sprites: Vec<SpriteEntity>,
}

/// Canvas and timing parameters
#[derive(Clone, PartialEq, Message)]
pub struct MovieParams {
    #[prost(float, optional, tag = "1")]
    pub view_box_width: Option<f32>,

    #[prost(float, optional, tag = "2")]
    pub view_box_height: Option<f32>,

    #[prost(int32, optional, tag = "3")]
    pub fps: Option<i32>,

    #[prost(int32, optional, tag = "4")]
    pub frames: Option<i32>,
}

/// One animated layer: an image key plus its keyframes
#[derive(Clone, PartialEq, Message)]
pub struct SpriteEntity {
    #[prost(string, optional, tag = "1")]
    pub image_key: Option<String>,

    #[prost(message, repeated, tag = "2")]
    pub frames: Vec<FrameEntity>,
}

/// One keyframe of one sprite
#[derive(Clone, PartialEq, Message)]
pub struct FrameEntity {
    #[prost(float, optional, tag = "1")]
    pub alpha: Option<f32>,

    #[prost(message, optional, tag = "2")]
    pub layout: Option<Layout>,

    #[prost(message, optional, tag = "3")]
    pub transform: Option<Transform>,

    /// SVG-style path data; empty means no clip
    #[prost(string, optional, tag = "4")]
    pub clip_path: Option<String>,

    #[prost(message, repeated, tag = "5")]
    pub shapes: Vec<ShapeEntity>,
}

/// Local bounding box before transform
#[derive(Clone, PartialEq, Message)]
pub struct Layout {
    #[prost(float, optional, tag = "1")]
    pub x: Option<f32>,

    #[prost(float, optional, tag = "2")]
    pub y: Option<f32>,

    #[prost(float, optional, tag = "3")]
    pub width: Option<f32>,

    #[prost(float, optional, tag = "4")]
    pub height: Option<f32>,
}

/// 2D affine transform: (x', y') = (a·x + c·y + tx, b·x + d·y + ty)
#[derive(Clone, PartialEq, Message)]
pub struct Transform {
    #[prost(float, optional, tag = "1")]
    pub a: Option<f32>,

    #[prost(float, optional, tag = "2")]
    pub b: Option<f32>,

    #[prost(float, optional, tag = "3")]
    pub c: Option<f32>,

    #[prost(float, optional, tag = "4")]
    pub d: Option<f32>,

    #[prost(float, optional, tag = "5")]
    pub tx: Option<f32>,

    #[prost(float, optional, tag = "6")]
    pub ty: Option<f32>,
}

/// A vector primitive with style and local transform
#[derive(Clone, PartialEq, Message)]
pub struct ShapeEntity {
    #[prost(enumeration = "ShapeType", tag = "1")]
    pub shape_type: i32,

    #[prost(message, optional, tag = "10")]
    pub styles: Option<ShapeStyle>,

    #[prost(message, optional, tag = "11")]
    pub transform: Option<Transform>,

    #[prost(oneof = "shape_entity::Args", tags = "2, 3, 4")]
    pub args: Option<shape_entity::Args>,
}

pub mod shape_entity {
    use prost::Oneof;

    /// Shape-specific geometry payload
    #[derive(Clone, PartialEq, Oneof)]
    pub enum Args {
        #[prost(message, tag = "2")]
        Shape(super::ShapeArgs),

        #[prost(message, tag = "3")]
        Rect(super::RectArgs),

        #[prost(message, tag = "4")]
        Ellipse(super::EllipseArgs),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum ShapeType {
    Shape = 0,
    Rect = 1,
    Ellipse = 2,
    /// Reuse the previous frame's resolved shapes for this sprite
    Keep = 3,
}

#[derive(Clone, PartialEq, Message)]
pub struct ShapeArgs {
    /// SVG-style path data
    #[prost(string, optional, tag = "1")]
    pub d: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct RectArgs {
    #[prost(float, optional, tag = "1")]
    pub x: Option<f32>,

    #[prost(float, optional, tag = "2")]
    pub y: Option<f32>,

    #[prost(float, optional, tag = "3")]
    pub width: Option<f32>,

    #[prost(float, optional, tag = "4")]
    pub height: Option<f32>,

    #[prost(float, optional, tag = "5")]
    pub corner_radius: Option<f32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct EllipseArgs {
    #[prost(float, optional, tag = "1")]
    pub x: Option<f32>,

    #[prost(float, optional, tag = "2")]
    pub y: Option<f32>,

    #[prost(float, optional, tag = "3")]
    pub radius_x: Option<f32>,

    #[prost(float, optional, tag = "4")]
    pub radius_y: Option<f32>,
}

/// Shared style payload for vector shapes
#[derive(Clone, PartialEq, Message)]
pub struct ShapeStyle {
    #[prost(message, optional, tag = "1")]
    pub fill: Option<RgbaColor>,

    #[prost(message, optional, tag = "2")]
    pub stroke: Option<RgbaColor>,

    #[prost(float, optional, tag = "3")]
    pub stroke_width: Option<f32>,

    /// 0 = butt, 1 = round, 2 = square
    #[prost(enumeration = "LineCap", optional, tag = "4")]
    pub line_cap: Option<i32>,

    /// 0 = miter, 1 = round, 2 = bevel
    #[prost(enumeration = "LineJoin", optional, tag = "5")]
    pub line_join: Option<i32>,

    #[prost(float, optional, tag = "6")]
    pub miter_limit: Option<f32>,

    #[prost(float, optional, tag = "7")]
    pub line_dash_i: Option<f32>,

    #[prost(float, optional, tag = "8")]
    pub line_dash_ii: Option<f32>,

    #[prost(float, optional, tag = "9")]
    pub line_dash_iii: Option<f32>,
}

/// RGBA color with float channels in [0, 1]
#[derive(Clone, PartialEq, Message)]
pub struct RgbaColor {
    #[prost(float, optional, tag = "1")]
    pub r: Option<f32>,

    #[prost(float, optional, tag = "2")]
    pub g: Option<f32>,

    #[prost(float, optional, tag = "3")]
    pub b: Option<f32>,

    #[prost(float, optional, tag = "4")]
    pub a: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum LineCap {
    Butt = 0,
    Round = 1,
    Square = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum LineJoin {
    Miter = 0,
    Round = 1,
    Bevel = 2,
}
