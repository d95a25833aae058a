use crate::config::GreetingInput;
use crate::error::SceneError;
use crate::falling::{DisplayMode, FallingObject, ObjectKind};
use crate::frame_loop::LoopState;
use crate::loader::{image_load_channel, ImageLoad, ImageLoadQueue, ImageLoadSender};
use crate::scene::{RenderBackend, Scene, SpriteSource};
use crate::state::Camera;
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::Cell;
use std::rc::Rc;

/// Mode shared between the main loop (reads it) and the input handlers and
/// heart overlay (flip it).
#[derive(Clone, Debug, Default)]
pub struct ModeFlag(Rc<Cell<DisplayMode>>);

impl ModeFlag {
    pub fn get(&self) -> DisplayMode {
        self.0.get()
    }

    pub fn set(&self, mode: DisplayMode) {
        self.0.set(mode);
    }

    /// Flip and return the new mode.
    pub fn toggle(&self) -> DisplayMode {
        let next = self.0.get().toggled();
        self.0.set(next);
        next
    }

    /// Flip the mode, running `enter_heart` or `leave_heart` for the new
    /// state. When `enter_heart` reports failure the flip is undone.
    pub fn toggle_with(
        &self,
        enter_heart: impl FnOnce() -> bool,
        leave_heart: impl FnOnce(),
    ) -> DisplayMode {
        match self.toggle() {
            DisplayMode::Heart => {
                if enter_heart() {
                    return DisplayMode::Heart;
                }
                self.set(DisplayMode::Normal);
                DisplayMode::Normal
            }
            DisplayMode::Normal => {
                leave_heart();
                DisplayMode::Normal
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced { respawned: usize },
    Stopped,
}

/// Everything one running scene owns: clock, camera target, mode, objects and
/// the backend that draws them.
pub struct AnimationContext<B: RenderBackend> {
    scene: Scene,
    backend: B,
    queue: Option<ImageLoadQueue<B::Bitmap>>,
    rng: StdRng,
    clock: f32,
    pointer: Vec2,
    camera_target: Vec2,
    mode: ModeFlag,
    state: LoopState,
}

impl<B: RenderBackend> AnimationContext<B> {
    /// Build the scene and hand back the sender image loads report through.
    pub fn mount(
        input: &GreetingInput,
        aspect: f32,
        mut backend: B,
        mut rng: StdRng,
    ) -> (Self, ImageLoadSender<B::Bitmap>) {
        let scene = Scene::build(input, aspect, &mut backend, &mut rng);
        let (sender, queue) = image_load_channel();
        let ctx = Self {
            scene,
            backend,
            queue: Some(queue),
            rng,
            clock: 0.0,
            pointer: Vec2::ZERO,
            camera_target: Vec2::ZERO,
            mode: ModeFlag::default(),
            state: LoopState::Running,
        };
        (ctx, sender)
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state == LoopState::Stopped {
            return TickOutcome::Stopped;
        }
        self.drain_image_loads();

        let config = &self.scene.config;
        self.clock += config.motion.clock_step;
        self.scene
            .camera
            .ease_toward(self.camera_target, config.camera.easing);

        let wind = Vec2::new(
            self.pointer.x * config.motion.wind_x,
            self.pointer.y * config.motion.wind_z,
        );
        let mode = self.mode.get();
        let mut respawned = 0;
        for object in &mut self.scene.objects {
            object.visible = object.kind.visible_in(mode);
            if object.advance(self.clock, wind, config, &mut self.rng) {
                respawned += 1;
            }
        }
        self.scene.starfield.spin(config.starfield.spin_per_tick);

        self.backend.render(&self.scene.frame_view());
        TickOutcome::Advanced { respawned }
    }

    fn drain_image_loads(&mut self) {
        let Some(queue) = &self.queue else {
            return;
        };
        for load in queue.drain() {
            match load {
                ImageLoad::Loaded {
                    index,
                    locator,
                    bitmap,
                } => match self.backend.create_sprite(SpriteSource::Photo(&bitmap)) {
                    Ok(sprite) => {
                        log::info!("[loader] photo {} ready: {}", index, locator);
                        self.scene.objects.push(FallingObject::spawn(
                            ObjectKind::Image,
                            sprite,
                            &self.scene.config.image,
                            &self.scene.config.spawn,
                            &mut self.rng,
                        ));
                    }
                    Err(e) => log::warn!("[loader] skipping photo {}: {}", locator, e),
                },
                ImageLoad::Failed {
                    locator, reason, ..
                } => {
                    let err = SceneError::AssetLoad { locator, reason };
                    log::error!("[loader] {}", err);
                }
            }
        }
    }

    /// Pointer in normalized device coordinates, y up.
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.pointer = ndc;
        self.camera_target = ndc * self.scene.config.camera.pointer_gain;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.camera.set_viewport(width, height);
        self.backend.resize(width, height);
    }

    pub fn toggle_mode(&self) -> DisplayMode {
        self.mode.toggle()
    }

    pub fn mode_flag(&self) -> ModeFlag {
        self.mode.clone()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn objects(&self) -> &[FallingObject] {
        &self.scene.objects
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.scene.camera
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Stop ticking and release every sprite plus the backend. Only the first
    /// call does anything; returns whether it did.
    pub fn teardown(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        self.queue = None;
        let released = self.scene.objects.len();
        for object in self.scene.objects.drain(..) {
            self.backend.release_sprite(object.sprite);
        }
        self.backend.release();
        log::info!("[loop] stopped, released {} sprites", released);
        true
    }
}
