use greeting_core::{FrameDriver, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the core's frame driver seam.
pub struct RafDriver {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameDriver for RafDriver {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("[loop] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

pub type SharedLoop = Rc<RefCell<FrameLoop<RafDriver>>>;

/// Run `step` once per animation frame until it returns false or the loop is
/// stopped. Stop the returned loop before dropping it.
pub fn start_loop(mut step: impl FnMut() -> bool + 'static) -> Option<SharedLoop> {
    let window = web::window()?;
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(RafDriver {
        window,
        callback: callback.clone(),
    })));

    let weak = Rc::downgrade(&frame_loop);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(lp) = weak.upgrade() else {
            return;
        };
        if !lp.borrow_mut().on_frame() {
            return;
        }
        if step() {
            lp.borrow_mut().schedule();
        } else {
            lp.borrow_mut().stop();
        }
    }) as Box<dyn FnMut()>));

    frame_loop.borrow_mut().schedule();
    Some(frame_loop)
}
