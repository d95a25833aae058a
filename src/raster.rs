//! Offscreen Canvas 2D rasters that become sprite textures.

use crate::constants::*;
use crate::dom;
use greeting_core::{cover_crop, heart_outline, rounded_square, Message, PathCommand, SceneError};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Straight-alpha RGBA8 pixels, row-major, top row first.
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

fn js_err(e: wasm_bindgen::JsValue) -> SceneError {
    SceneError::Backend(format!("{:?}", e))
}

fn scratch(
    document: &web::Document,
    width: u32,
    height: u32,
) -> Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d), SceneError> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| SceneError::MissingContext { what: "canvas" })?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = dom::context_2d(&canvas)?;
    Ok((canvas, ctx))
}

fn read_back(ctx: &web::CanvasRenderingContext2d, width: u32, height: u32) -> Result<Raster, SceneError> {
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_err)?;
    Ok(Raster {
        width,
        height,
        rgba: data.data().0,
    })
}

fn trace(ctx: &web::CanvasRenderingContext2d, path: &[PathCommand]) {
    ctx.begin_path();
    for cmd in path {
        match *cmd {
            PathCommand::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            PathCommand::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            PathCommand::QuadTo { control, to } => ctx.quadratic_curve_to(
                control.x as f64,
                control.y as f64,
                to.x as f64,
                to.y as f64,
            ),
            PathCommand::CubicTo { c1, c2, to } => ctx.bezier_curve_to(
                c1.x as f64,
                c1.y as f64,
                c2.x as f64,
                c2.y as f64,
                to.x as f64,
                to.y as f64,
            ),
            PathCommand::Close => ctx.close_path(),
        }
    }
}

/// Rose-crimson-rose horizontal gradient from `x0` to `x1` at height `y`.
pub fn rose_gradient(
    ctx: &web::CanvasRenderingContext2d,
    x0: f64,
    x1: f64,
    y: f64,
) -> Result<web::CanvasGradient, SceneError> {
    let gradient = ctx.create_linear_gradient(x0, y, x1, y);
    gradient.add_color_stop(0.0, ROSE).map_err(js_err)?;
    gradient.add_color_stop(0.5, CRIMSON).map_err(js_err)?;
    gradient.add_color_stop(1.0, ROSE).map_err(js_err)?;
    Ok(gradient)
}

pub fn message(document: &web::Document, message: &Message) -> Result<Raster, SceneError> {
    let (w, h) = (MESSAGE_RASTER_W, MESSAGE_RASTER_H);
    let (_canvas, ctx) = scratch(document, w, h)?;

    let gradient = rose_gradient(&ctx, 0.0, w as f64, 0.0)?;
    ctx.set_shadow_color(CRIMSON);
    ctx.set_shadow_blur(MESSAGE_GLOW_BLUR);
    ctx.set_fill_style_canvas_gradient(&gradient);
    let px = message.size.unwrap_or(MESSAGE_FONT_PX);
    ctx.set_font(&format!("italic bold {}px {}", px, MESSAGE_FONT_FAMILY));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&message.text, w as f64 / 2.0, h as f64 / 2.0)
        .map_err(js_err)?;

    read_back(&ctx, w, h)
}

/// Rounded, glowing, cover-cropped square frame around a decoded photo.
pub fn photo(document: &web::Document, image: &web::HtmlImageElement) -> Result<Raster, SceneError> {
    let side = (PHOTO_FRAME_PX + PHOTO_PADDING_PX * 2.0) as u32;
    let (_canvas, ctx) = scratch(document, side, side)?;
    let origin = Vec2::splat(PHOTO_PADDING_PX);
    let frame = rounded_square(origin, PHOTO_FRAME_PX, PHOTO_CORNER_RADIUS_PX);

    // glow first, unclipped
    ctx.save();
    ctx.set_shadow_color(WHITE);
    ctx.set_shadow_blur(PHOTO_GLOW_BLUR);
    ctx.set_shadow_offset_x(0.0);
    ctx.set_shadow_offset_y(0.0);
    trace(&ctx, &frame);
    ctx.set_fill_style_str(WHITE);
    ctx.fill();
    ctx.restore();

    trace(&ctx, &frame);
    ctx.clip();
    let rect = cover_crop(
        image.natural_width() as f32,
        image.natural_height() as f32,
        PHOTO_TARGET_ASPECT,
        PHOTO_FRAME_PX,
    );
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        (origin.x + rect.x) as f64,
        (origin.y + rect.y) as f64,
        rect.width as f64,
        rect.height as f64,
    )
    .map_err(js_err)?;

    read_back(&ctx, side, side)
}

pub fn heart(document: &web::Document) -> Result<Raster, SceneError> {
    let side = HEART_RASTER_PX;
    let (_canvas, ctx) = scratch(document, side, side)?;
    let notch = Vec2::splat(side as f32 / 2.0);

    ctx.set_shadow_color(CRIMSON);
    ctx.set_shadow_blur(HEART_GLOW_BLUR);
    ctx.set_fill_style_str(ROSE);
    trace(&ctx, &heart_outline(notch, HEART_SHAPE_PX, HEART_SHAPE_PX));
    ctx.fill();

    read_back(&ctx, side, side)
}
