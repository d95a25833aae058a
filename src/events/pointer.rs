use crate::input::{self, DoubleTap};
use crate::overlay::HeartOverlay;
use greeting_core::{DisplayMode, ModeFlag};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::InputWiring;

pub(super) fn wire_pointer_move(w: &mut InputWiring<'_>) {
    for event in ["pointermove", "mousemove"] {
        let scene = w.scene.clone();
        let window = w.window.clone();
        w.listeners.add(&w.window, event, move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let (vw, vh) = crate::dom::viewport_size(&window);
            let ndc = input::pointer_ndc(
                ev.client_x() as f32,
                ev.client_y() as f32,
                vw as f32,
                vh as f32,
            );
            scene.borrow_mut().pointer_moved(ndc);
        });
    }
}

/// `dblclick` and touch double tap share one detector so the dblclick a
/// mobile browser synthesizes after a double tap does not toggle again.
pub(super) fn wire_heart_toggle(w: &mut InputWiring<'_>) {
    let detector = Rc::new(RefCell::new(DoubleTap::default()));

    let mode = w.mode.clone();
    let overlay = w.overlay.clone();
    let taps = detector.clone();
    w.listeners.add(&w.window, "dblclick", move |ev: web::Event| {
        let mut taps = taps.borrow_mut();
        if taps.is_echo(ev.time_stamp()) {
            return;
        }
        taps.reset();
        toggle_heart_mode(&mode, &overlay);
    });

    let mode = w.mode.clone();
    let overlay = w.overlay.clone();
    w.listeners.add(&w.window, "pointerup", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if ev.pointer_type() != "touch" {
            return;
        }
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if detector.borrow_mut().tap(ev.time_stamp(), pos) {
            toggle_heart_mode(&mode, &overlay);
        }
    });
}

fn toggle_heart_mode(mode: &ModeFlag, overlay: &Rc<RefCell<HeartOverlay>>) {
    let before = mode.get();
    let next = mode.toggle_with(
        || overlay.borrow_mut().activate(),
        || overlay.borrow_mut().deactivate(),
    );
    match (before, next) {
        (_, DisplayMode::Heart) => log::info!("[heart] heart mode on"),
        (DisplayMode::Normal, DisplayMode::Normal) => {
            log::warn!("[heart] overlay did not start; staying in normal mode")
        }
        (DisplayMode::Heart, DisplayMode::Normal) => log::info!("[heart] heart mode off"),
    }
}
