use crate::constants::*;
use crate::dom;
use crate::frame::{self, SharedLoop};
use crate::raster;
use greeting_core::{HeartConfig, HeartSimulator, SceneError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Transparent canvas above the scene running the heart particle trace.
///
/// The canvas is created on first activation and only hidden afterwards; the
/// particle set is rebuilt on every activation.
pub struct HeartOverlay {
    document: web::Document,
    container: web::HtmlElement,
    layer: Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
    config: HeartConfig,
    running: Option<SharedLoop>,
}

impl HeartOverlay {
    pub fn new(document: web::Document, container: web::HtmlElement, config: HeartConfig) -> Self {
        Self {
            document,
            container,
            layer: None,
            config,
            running: None,
        }
    }

    fn layer(&mut self) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
        if let Some(layer) = &self.layer {
            return Ok(layer.clone());
        }
        let canvas = dom::create_layer_canvas(
            &self.document,
            &self.container,
            OVERLAY_CANVAS_ID,
            OVERLAY_Z_INDEX,
            false,
        )?;
        let ctx = dom::context_2d(&canvas)?;
        self.layer = Some((canvas.clone(), ctx.clone()));
        Ok((canvas, ctx))
    }

    /// Show the overlay and start its loop. False when it could not start.
    pub fn activate(&mut self) -> bool {
        if self.running.is_some() {
            return true;
        }
        let (canvas, ctx) = match self.layer() {
            Ok(layer) => layer,
            Err(e) => {
                log::warn!("[heart] overlay unavailable: {}", e);
                return false;
            }
        };
        let Some(window) = web::window() else {
            return false;
        };
        let (w, h) = dom::viewport_size(&window);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        _ = canvas.style().set_property("display", "block");

        let mut sim = HeartSimulator::new(w as f32, h as f32, &self.config, StdRng::from_entropy());
        log::info!("[heart] {} particles over {}x{}", sim.particles().len(), w, h);
        self.running = frame::start_loop(move || {
            sim.step();
            if let Err(e) = draw(&ctx, &sim, w, h) {
                log::error!("[heart] draw failed: {}", e);
            }
            true
        });
        if self.running.is_none() {
            _ = canvas.style().set_property("display", "none");
            return false;
        }
        true
    }

    pub fn deactivate(&mut self) {
        if let Some(lp) = self.running.take() {
            lp.borrow_mut().stop();
        }
        if let Some((canvas, _)) = &self.layer {
            _ = canvas.style().set_property("display", "none");
        }
    }

    /// Stop and take the canvas out of the page.
    pub fn remove(&mut self) {
        self.deactivate();
        if let Some((canvas, _)) = self.layer.take() {
            canvas.remove();
        }
    }
}

fn draw(
    ctx: &web::CanvasRenderingContext2d,
    sim: &HeartSimulator,
    width: f64,
    height: f64,
) -> Result<(), SceneError> {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(HEART_PARTICLE_FILL);
    for particle in sim.particles() {
        for p in particle.trail.iter() {
            ctx.fill_rect(p.x as f64, p.y as f64, 1.0, 1.0);
        }
    }

    let center = sim.center();
    let anchor = sim.caption_anchor();
    let (cx, cy) = (center.x as f64, center.y as f64);
    ctx.save();
    ctx.set_font(CAPTION_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let gradient = raster::rose_gradient(
        ctx,
        cx - CAPTION_GRADIENT_HALF_WIDTH,
        cx + CAPTION_GRADIENT_HALF_WIDTH,
        cy + CAPTION_GRADIENT_OFFSET_Y,
    )?;
    ctx.set_shadow_color(CRIMSON);
    ctx.set_shadow_blur(CAPTION_GLOW_BLUR);
    ctx.set_fill_style_canvas_gradient(&gradient);
    let drawn = ctx.fill_text(sim.caption(), anchor.x as f64, anchor.y as f64);
    ctx.restore();
    drawn.map_err(|e| SceneError::Backend(format!("{:?}", e)))
}
