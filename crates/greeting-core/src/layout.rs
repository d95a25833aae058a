//! Raster geometry for sprite textures: object-cover placement and the vector
//! paths the host draws with its 2D context.

use glam::Vec2;

/// Where to draw a source image inside a target square, in target pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scale an image so it fills a `size`-wide frame of aspect `target_aspect`
/// while preserving its own aspect, centered; the overflow gets clipped.
pub fn cover_crop(image_width: f32, image_height: f32, target_aspect: f32, size: f32) -> DrawRect {
    if image_width <= 0.0 || image_height <= 0.0 {
        return DrawRect {
            x: 0.0,
            y: 0.0,
            width: size,
            height: size,
        };
    }
    let image_aspect = image_width / image_height;
    if image_aspect > target_aspect {
        let width = size * (image_aspect / target_aspect);
        DrawRect {
            x: (size - width) / 2.0,
            y: 0.0,
            width,
            height: size,
        }
    } else {
        let height = size * (target_aspect / image_aspect);
        DrawRect {
            x: 0.0,
            y: (size - height) / 2.0,
            width: size,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { control: Vec2, to: Vec2 },
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
    Close,
}

/// Rounded square at `origin` with quadratic corners of radius `r`.
pub fn rounded_square(origin: Vec2, size: f32, r: f32) -> Vec<PathCommand> {
    use PathCommand::*;
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size, origin.y + size);
    vec![
        MoveTo(Vec2::new(x0 + r, y0)),
        LineTo(Vec2::new(x1 - r, y0)),
        QuadTo {
            control: Vec2::new(x1, y0),
            to: Vec2::new(x1, y0 + r),
        },
        LineTo(Vec2::new(x1, y1 - r)),
        QuadTo {
            control: Vec2::new(x1, y1),
            to: Vec2::new(x1 - r, y1),
        },
        LineTo(Vec2::new(x0 + r, y1)),
        QuadTo {
            control: Vec2::new(x0, y1),
            to: Vec2::new(x0, y1 - r),
        },
        LineTo(Vec2::new(x0, y0 + r)),
        QuadTo {
            control: Vec2::new(x0, y0),
            to: Vec2::new(x0 + r, y0),
        },
        Close,
    ]
}

/// Heart outline of `width` x `height` whose top notch sits at `top`.
pub fn heart_outline(top: Vec2, width: f32, height: f32) -> Vec<PathCommand> {
    use PathCommand::*;
    let (x, y) = (top.x, top.y);
    let (hw, q) = (width / 2.0, height / 4.0);
    vec![
        MoveTo(Vec2::new(x, y + q)),
        CubicTo {
            c1: Vec2::new(x, y),
            c2: Vec2::new(x - hw, y),
            to: Vec2::new(x - hw, y + q),
        },
        CubicTo {
            c1: Vec2::new(x - hw, y + height / 2.0),
            c2: Vec2::new(x, y + q * 3.0),
            to: Vec2::new(x, y + height),
        },
        CubicTo {
            c1: Vec2::new(x, y + q * 3.0),
            c2: Vec2::new(x + hw, y + height / 2.0),
            to: Vec2::new(x + hw, y + q),
        },
        CubicTo {
            c1: Vec2::new(x + hw, y),
            c2: Vec2::new(x, y),
            to: Vec2::new(x, y + q),
        },
    ]
}
