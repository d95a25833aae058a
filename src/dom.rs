use crate::constants::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = ((rect.width() * dpr) as u32).max(1);
        let h_px = ((rect.height() * dpr) as u32).max(1);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (canvas.width(), canvas.height())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Element the scene mounts into: `#greeting-root`, falling back to `<body>`.
pub fn mount_container(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    if let Some(el) = document.get_element_by_id(CONTAINER_ID) {
        return el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e));
    }
    document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body> to mount into"))
}

/// Create a full-viewport canvas layered at `z_index` inside `container`.
pub fn create_layer_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
    id: &str,
    z_index: i32,
    pointer_events: bool,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(id);
    let style = canvas.style();
    let props = [
        ("position", "fixed"),
        ("left", "0"),
        ("top", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("display", "block"),
        ("background", "transparent"),
        ("pointer-events", if pointer_events { "auto" } else { "none" }),
    ];
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
    _ = style.set_property("z-index", &z_index.to_string());
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Text of the `<script type="application/json" id="greeting-data">` block.
pub fn greeting_data(document: &web::Document) -> Option<String> {
    document
        .get_element_by_id(DATA_ELEMENT_ID)
        .and_then(|el| el.text_content())
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, greeting_core::SceneError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(greeting_core::SceneError::MissingContext { what: "2d" })
}

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Every DOM listener the scene installed, so teardown can take them all back.
#[derive(Default)]
pub struct Listeners {
    installed: Vec<Listener>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] could not listen for {}: {:?}", event, e);
            return;
        }
        self.installed.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
    }

    pub fn remove_all(&mut self) {
        for l in self.installed.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref());
        }
    }
}
