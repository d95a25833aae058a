#![cfg(target_arch = "wasm32")]
use crate::constants::{SCENE_CANVAS_ID, SCENE_Z_INDEX};
use greeting_core::{AnimationContext, GreetingInput, Mount, TickOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod raster;
mod render;

/// Everything one mounted greeting owns in the page.
struct App {
    scene: events::SharedScene,
    main_loop: frame::SharedLoop,
    overlay: Rc<RefCell<overlay::HeartOverlay>>,
    listeners: dom::Listeners,
    images: loader::ImageRequests,
    canvas: web::HtmlCanvasElement,
}

impl App {
    fn teardown(mut self) {
        self.main_loop.borrow_mut().stop();
        self.listeners.remove_all();
        self.images.cancel();
        self.overlay.borrow_mut().remove();
        self.scene.borrow_mut().teardown();
        self.canvas.remove();
        log::info!("[app] unmounted");
    }
}

thread_local! {
    static APP: RefCell<Mount<App>> = RefCell::new(Mount::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("greeting starting");
    mount();
    Ok(())
}

/// Build the scene once. Calling again while mounted (or mounting) is a no-op.
#[wasm_bindgen]
pub fn mount() {
    if !APP.with(|slot| slot.borrow_mut().begin()) {
        log::warn!("[app] already mounted; ignoring mount()");
        return;
    }
    spawn_local(async move {
        match init().await {
            Ok(app) => {
                if let Err(app) = APP.with(|slot| slot.borrow_mut().complete(app)) {
                    log::info!("[app] unmounted during setup");
                    app.teardown();
                }
            }
            Err(e) => {
                log::error!("init error: {:?}", e);
                APP.with(|slot| slot.borrow_mut().abort());
            }
        }
    });
}

/// Stop both loops, drop listeners and release every GPU resource. Idempotent.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.teardown();
    }
}

fn read_input(document: &web::Document) -> GreetingInput {
    let Some(json) = dom::greeting_data(document) else {
        log::warn!("[app] no #greeting-data block; showing stars and hearts only");
        return GreetingInput::default();
    };
    GreetingInput::from_json(&json).unwrap_or_else(|e| {
        log::error!("[app] {}; falling back to defaults", e);
        GreetingInput::default()
    })
}

async fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let input = read_input(&document);

    let container = dom::mount_container(&document)?;
    let canvas =
        dom::create_layer_canvas(&document, &container, SCENE_CANVAS_ID, SCENE_Z_INDEX, true)?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let renderer = match render::GpuRenderer::new(document.clone(), &canvas).await {
        Ok(r) => r,
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };
    let (ctx, sender) = AnimationContext::mount(
        &input,
        width as f32 / height as f32,
        renderer,
        StdRng::from_entropy(),
    );
    let mode = ctx.mode_flag();
    let scene: events::SharedScene = Rc::new(RefCell::new(ctx));
    let images = loader::ImageRequests::start(&input.images, &sender);

    let scene_tick = scene.clone();
    let Some(main_loop) = frame::start_loop(move || {
        matches!(scene_tick.borrow_mut().tick(), TickOutcome::Advanced { .. })
    }) else {
        scene.borrow_mut().teardown();
        canvas.remove();
        anyhow::bail!("no window for the animation loop");
    };

    let overlay = Rc::new(RefCell::new(overlay::HeartOverlay::new(
        document.clone(),
        container,
        input.config.overlay.clone(),
    )));
    let mut listeners = dom::Listeners::default();
    events::wire_input_handlers(events::InputWiring {
        window,
        canvas: canvas.clone(),
        scene: scene.clone(),
        mode,
        overlay: overlay.clone(),
        listeners: &mut listeners,
    });

    log::info!(
        "[app] mounted: {} messages, {} photos requested",
        input.messages.len(),
        input.images.len()
    );
    Ok(App {
        scene,
        main_loop,
        overlay,
        listeners,
        images,
        canvas,
    })
}
