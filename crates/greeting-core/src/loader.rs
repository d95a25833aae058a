//! Completion queue between out-of-band image loads and the animation tick.
//!
//! Load callbacks only ever send; the tick drains everything that arrived
//! since the previous frame before touching the object list.

use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug)]
pub enum ImageLoad<B> {
    Loaded {
        index: usize,
        locator: String,
        bitmap: B,
    },
    Failed {
        index: usize,
        locator: String,
        reason: String,
    },
}

impl<B> ImageLoad<B> {
    pub fn locator(&self) -> &str {
        match self {
            ImageLoad::Loaded { locator, .. } | ImageLoad::Failed { locator, .. } => locator,
        }
    }
}

pub struct ImageLoadSender<B> {
    tx: Sender<ImageLoad<B>>,
}

// Manual impl: `B` itself need not be Clone.
impl<B> Clone for ImageLoadSender<B> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<B> ImageLoadSender<B> {
    /// Returns false once the scene has been torn down.
    pub fn send_loaded(&self, index: usize, locator: impl Into<String>, bitmap: B) -> bool {
        self.tx
            .send(ImageLoad::Loaded {
                index,
                locator: locator.into(),
                bitmap,
            })
            .is_ok()
    }

    pub fn send_failed(
        &self,
        index: usize,
        locator: impl Into<String>,
        reason: impl Into<String>,
    ) -> bool {
        self.tx
            .send(ImageLoad::Failed {
                index,
                locator: locator.into(),
                reason: reason.into(),
            })
            .is_ok()
    }
}

pub struct ImageLoadQueue<B> {
    rx: Receiver<ImageLoad<B>>,
}

impl<B> ImageLoadQueue<B> {
    /// Everything that completed since the last drain, in arrival order.
    pub fn drain(&self) -> Vec<ImageLoad<B>> {
        self.rx.try_iter().collect()
    }
}

pub fn image_load_channel<B>() -> (ImageLoadSender<B>, ImageLoadQueue<B>) {
    let (tx, rx) = mpsc::channel();
    (ImageLoadSender { tx }, ImageLoadQueue { rx })
}
