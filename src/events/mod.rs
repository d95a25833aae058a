use crate::dom::{self, Listeners};
use crate::overlay::HeartOverlay;
use crate::render::GpuRenderer;
use greeting_core::{AnimationContext, ModeFlag};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;

pub type SharedScene = Rc<RefCell<AnimationContext<GpuRenderer>>>;

pub struct InputWiring<'a> {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub scene: SharedScene,
    pub mode: ModeFlag,
    pub overlay: Rc<RefCell<HeartOverlay>>,
    pub listeners: &'a mut Listeners,
}

/// Pointer, double click / double tap and resize. Everything lands in
/// `listeners` so teardown can remove it.
pub fn wire_input_handlers(mut w: InputWiring<'_>) {
    pointer::wire_pointer_move(&mut w);
    pointer::wire_heart_toggle(&mut w);
    wire_resize(&mut w);
}

fn wire_resize(w: &mut InputWiring<'_>) {
    let scene = w.scene.clone();
    let canvas = w.canvas.clone();
    w.listeners.add(&w.window, "resize", move |_ev: web::Event| {
        let (width, height) = dom::sync_canvas_backing_size(&canvas);
        scene.borrow_mut().resize(width, height);
    });
}
