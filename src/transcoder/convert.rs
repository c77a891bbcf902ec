//! Style and geometry normalization from decoded movie fields to the
//! CSS-style attributes the player format uses.

use crate::decoder::schema::{
    shape_entity::Args, Layout, RgbaColor, ShapeEntity, ShapeStyle, ShapeType, Transform,
};
use crate::transcoder::types::{
    EllipsePath, RectPath, ShapePath, VideoLayout, VideoShape, VideoStyles, VideoTransform,
};

/// Convert a float-channel RGBA color to a CSS `rgba(...)` string.
///
/// Channels are truncated, not rounded (0.5 * 255 becomes 127). Existing
/// renderers depend on the truncated values, so this must stay bit-for-bit
/// stable.
pub fn convert_rgba(color: Option<&RgbaColor>) -> Option<String> {
    let c = color?;
    let r = (255.0 * c.r.unwrap_or(0.0)) as i32;
    let g = (255.0 * c.g.unwrap_or(0.0)) as i32;
    let b = (255.0 * c.b.unwrap_or(0.0)) as i32;
    let a = c.a.unwrap_or(0.0) as i32;
    Some(format!("rgba({}, {}, {}, {})", r, g, b, a))
}

/// Map a line-cap enum value to its CSS keyword. Out-of-range or absent
/// values map to `None`, never to a default keyword.
pub fn convert_line_cap(value: Option<i32>) -> Option<String> {
    match value? {
        0 => Some("butt".to_string()),
        1 => Some("round".to_string()),
        2 => Some("square".to_string()),
        _ => None,
    }
}

/// Map a line-join enum value to its CSS keyword, same absence rules as
/// [`convert_line_cap`].
pub fn convert_line_join(value: Option<i32>) -> Option<String> {
    match value? {
        0 => Some("miter".to_string()),
        1 => Some("round".to_string()),
        2 => Some("bevel".to_string()),
        _ => None,
    }
}

/// Build the dash list from the three optional dash-length fields.
///
/// Positional padding: a present second value gets a leading zero if the
/// first is missing, and a present third value pads the list to length 2
/// before landing at index 2. Values that are absent or <= 0 do not count.
pub fn convert_line_dash(styles: &ShapeStyle) -> Vec<f32> {
    let mut dash = Vec::new();

    if let Some(i) = styles.line_dash_i {
        if i > 0.0 {
            dash.push(i);
        }
    }
    if let Some(ii) = styles.line_dash_ii {
        if ii > 0.0 {
            if dash.is_empty() {
                dash.push(0.0);
            }
            dash.push(ii);
        }
    }
    if let Some(iii) = styles.line_dash_iii {
        if iii > 0.0 {
            while dash.len() < 2 {
                dash.push(0.0);
            }
            dash.push(iii);
        }
    }

    dash
}

/// Resolve a transform, defaulting each missing component to identity
pub fn convert_transform(t: Option<&Transform>) -> VideoTransform {
    VideoTransform {
        a: t.and_then(|t| t.a).unwrap_or(1.0),
        b: t.and_then(|t| t.b).unwrap_or(0.0),
        c: t.and_then(|t| t.c).unwrap_or(0.0),
        d: t.and_then(|t| t.d).unwrap_or(1.0),
        tx: t.and_then(|t| t.tx).unwrap_or(0.0),
        ty: t.and_then(|t| t.ty).unwrap_or(0.0),
    }
}

/// Resolve a layout rectangle, defaulting each missing component to 0
pub fn convert_layout(l: Option<&Layout>) -> VideoLayout {
    VideoLayout {
        x: l.and_then(|l| l.x).unwrap_or(0.0),
        y: l.and_then(|l| l.y).unwrap_or(0.0),
        width: l.and_then(|l| l.width).unwrap_or(0.0),
        height: l.and_then(|l| l.height).unwrap_or(0.0),
    }
}

fn convert_styles(styles: &ShapeStyle) -> VideoStyles {
    VideoStyles {
        fill: convert_rgba(styles.fill.as_ref()),
        stroke: convert_rgba(styles.stroke.as_ref()),
        stroke_width: styles.stroke_width,
        line_cap: convert_line_cap(styles.line_cap),
        line_join: convert_line_join(styles.line_join),
        miter_limit: styles.miter_limit,
        line_dash: Some(convert_line_dash(styles)),
    }
}

/// Convert a frame's shape list into resolved output shapes.
///
/// Entries without a styles payload, and entries whose declared type has no
/// matching geometry payload, are silently dropped. A KEEP entry converts to
/// nothing here; reuse of the previous frame is handled by the caller.
pub fn convert_shapes(shapes: &[ShapeEntity]) -> Vec<VideoShape> {
    let mut result = Vec::new();

    for shape in shapes {
        let styles = match &shape.styles {
            Some(styles) => convert_styles(styles),
            None => continue,
        };
        let transform = convert_transform(shape.transform.as_ref());

        match (shape.shape_type, shape.args.as_ref()) {
            (t, Some(Args::Shape(args))) if t == ShapeType::Shape as i32 => {
                result.push(VideoShape::Shape {
                    path: ShapePath { d: args.d.clone().unwrap_or_default() },
                    styles,
                    transform,
                });
            }
            (t, Some(Args::Rect(args))) if t == ShapeType::Rect as i32 => {
                result.push(VideoShape::Rect {
                    path: RectPath {
                        x: args.x.unwrap_or(0.0),
                        y: args.y.unwrap_or(0.0),
                        width: args.width.unwrap_or(0.0),
                        height: args.height.unwrap_or(0.0),
                        corner_radius: args.corner_radius.unwrap_or(0.0),
                    },
                    styles,
                    transform,
                });
            }
            (t, Some(Args::Ellipse(args))) if t == ShapeType::Ellipse as i32 => {
                result.push(VideoShape::Ellipse {
                    path: EllipsePath {
                        x: args.x.unwrap_or(0.0),
                        y: args.y.unwrap_or(0.0),
                        radius_x: args.radius_x.unwrap_or(0.0),
                        radius_y: args.radius_y.unwrap_or(0.0),
                    },
                    styles,
                    transform,
                });
            }
            // Declared type with a missing or mismatched payload yields no
            // output shape for this entry.
            _ => {}
        }
    }

    result
}
