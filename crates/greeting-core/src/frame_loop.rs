//! Host-agnostic frame scheduling.
//!
//! A `FrameLoop` owns the Running/Stopped state of one re-posted callback and
//! the handle of the frame currently pending. The host supplies a
//! `FrameDriver` (e.g. `requestAnimationFrame`); tests supply a manual one.

/// Something that can post and cancel a single next-frame callback.
pub trait FrameDriver {
    type Handle: Copy;

    /// Ask for one more frame. `None` when the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct FrameLoop<D: FrameDriver> {
    driver: D,
    state: LoopState,
    pending: Option<D::Handle>,
}

impl<D: FrameDriver> FrameLoop<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            state: LoopState::Running,
            pending: None,
        }
    }

    /// Post the next frame unless stopped or one is already pending.
    pub fn schedule(&mut self) {
        if self.state == LoopState::Stopped || self.pending.is_some() {
            return;
        }
        self.pending = self.driver.request_frame();
    }

    /// Call at the top of the frame callback. Returns whether the tick should run.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        self.state == LoopState::Running
    }

    /// Running -> Stopped, cancelling the pending frame. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;
        if let Some(handle) = self.pending.take() {
            self.driver.cancel_frame(handle);
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
