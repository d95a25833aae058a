use greeting_core::ImageLoadSender;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PendingImage {
    image: web::HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

/// In-flight photo requests. Completion handlers only post to the scene's
/// load queue; dropping this detaches them.
#[derive(Default)]
pub struct ImageRequests {
    pending: Vec<PendingImage>,
}

impl ImageRequests {
    pub fn start(locators: &[String], sender: &ImageLoadSender<web::HtmlImageElement>) -> Self {
        let mut pending = Vec::with_capacity(locators.len());
        for (index, locator) in locators.iter().enumerate() {
            let image = match web::HtmlImageElement::new() {
                Ok(img) => img,
                Err(e) => {
                    log::warn!("[loader] cannot create image for {}: {:?}", locator, e);
                    continue;
                }
            };
            image.set_cross_origin(Some("anonymous"));

            let tx = sender.clone();
            let img = image.clone();
            let loc = locator.clone();
            let onload = Closure::wrap(Box::new(move || {
                if !tx.send_loaded(index, loc.clone(), img.clone()) {
                    log::debug!("[loader] {} arrived after teardown", loc);
                }
            }) as Box<dyn FnMut()>);

            let tx = sender.clone();
            let loc = locator.clone();
            let onerror = Closure::wrap(Box::new(move || {
                _ = tx.send_failed(index, loc.clone(), "image failed to load or decode");
            }) as Box<dyn FnMut()>);

            image.set_onload(Some(onload.as_ref().unchecked_ref()));
            image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            image.set_src(locator);
            pending.push(PendingImage {
                image,
                _onload: onload,
                _onerror: onerror,
            });
        }
        log::info!("[loader] requested {} photos", pending.len());
        Self { pending }
    }

    pub fn cancel(&mut self) {
        for p in self.pending.drain(..) {
            p.image.set_onload(None);
            p.image.set_onerror(None);
        }
    }
}
