//! Scene bootstrap and the seam to whatever draws it.

use crate::config::{GreetingInput, Message, SceneConfig};
use crate::error::SceneError;
use crate::falling::{FallingObject, ObjectKind, SpriteId};
use crate::starfield::Starfield;
use crate::state::{Camera, Lighting};
use rand::Rng;

/// What a sprite texture should be rasterized from.
pub enum SpriteSource<'a, B> {
    Message(&'a Message),
    Photo(&'a B),
    Heart,
}

impl<B> SpriteSource<'_, B> {
    pub fn kind(&self) -> ObjectKind {
        match self {
            SpriteSource::Message(_) => ObjectKind::Message,
            SpriteSource::Photo(_) => ObjectKind::Image,
            SpriteSource::Heart => ObjectKind::Heart,
        }
    }
}

/// Read-only snapshot handed to the backend once per tick.
pub struct FrameView<'a> {
    pub camera: &'a Camera,
    pub starfield: &'a Starfield,
    pub objects: &'a [FallingObject],
    pub background: u32,
}

/// GPU (or fake) side of the scene. Owns every sprite texture it hands out.
pub trait RenderBackend {
    /// Decoded image as the host delivers it.
    type Bitmap;

    fn create_sprite(&mut self, source: SpriteSource<'_, Self::Bitmap>) -> Result<SpriteId, SceneError>;
    fn release_sprite(&mut self, sprite: SpriteId);
    fn upload_starfield(&mut self, starfield: &Starfield);
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self, frame: &FrameView<'_>);
    /// Drop the device and surface. Called once, after every sprite is released.
    fn release(&mut self);
}

pub struct Scene {
    pub camera: Camera,
    pub lighting: Lighting,
    pub starfield: Starfield,
    pub objects: Vec<FallingObject>,
    pub config: SceneConfig,
}

impl Scene {
    /// Messages and hearts are built now; photos arrive later through the
    /// load queue. Objects whose sprite cannot be created are skipped.
    pub fn build<B: RenderBackend, R: Rng>(
        input: &GreetingInput,
        aspect: f32,
        backend: &mut B,
        rng: &mut R,
    ) -> Self {
        let config = input.config.clone();
        let camera = Camera::from_config(&config.camera, aspect);
        let lighting = Lighting::default();
        let starfield = Starfield::generate(&config.starfield, rng);
        backend.upload_starfield(&starfield);

        let mut objects = Vec::with_capacity(input.messages.len() + config.heart_count);
        for message in &input.messages {
            match backend.create_sprite(SpriteSource::Message(message)) {
                Ok(sprite) => objects.push(FallingObject::spawn(
                    ObjectKind::Message,
                    sprite,
                    &config.message,
                    &config.spawn,
                    rng,
                )),
                Err(e) => log::warn!("[scene] skipping message {:?}: {}", message.text, e),
            }
        }
        for _ in 0..config.heart_count {
            match backend.create_sprite(SpriteSource::Heart) {
                Ok(sprite) => objects.push(FallingObject::spawn(
                    ObjectKind::Heart,
                    sprite,
                    &config.heart,
                    &config.spawn,
                    rng,
                )),
                Err(e) => {
                    log::warn!("[scene] skipping heart: {}", e);
                }
            }
        }

        let messages = objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Message)
            .count();
        log::info!(
            "[scene] built {} messages, {} hearts, {} stars; {} photos pending",
            messages,
            objects.len() - messages,
            starfield.points.len(),
            input.images.len()
        );
        log::debug!(
            "[scene] lighting: ambient {:#08x} x{}, {} point lights",
            lighting.ambient.color,
            lighting.ambient.intensity,
            lighting.points.len()
        );

        Self {
            camera,
            lighting,
            starfield,
            objects,
            config,
        }
    }

    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            camera: &self.camera,
            starfield: &self.starfield,
            objects: &self.objects,
            background: self.config.background,
        }
    }
}
