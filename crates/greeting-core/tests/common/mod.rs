// Test doubles shared by the integration tests.

#![allow(dead_code)]

use greeting_core::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FakeBitmap {
    pub width: u32,
    pub height: u32,
}

/// Backend that only counts what it was asked to do.
#[derive(Default)]
pub struct RecordingBackend {
    next_id: u32,
    pub created: Vec<SpriteId>,
    pub released: Vec<SpriteId>,
    pub frames: usize,
    pub last_visible: usize,
    pub stars_uploaded: usize,
    pub resized: Option<(u32, u32)>,
    pub release_calls: usize,
    pub refuse_messages: bool,
}

impl RecordingBackend {
    /// Fails every message sprite, as a missing 2D context would.
    pub fn refusing_messages() -> Self {
        Self {
            refuse_messages: true,
            ..Self::default()
        }
    }
}

impl RenderBackend for RecordingBackend {
    type Bitmap = FakeBitmap;

    fn create_sprite(&mut self, source: SpriteSource<'_, FakeBitmap>) -> Result<SpriteId, SceneError> {
        if self.refuse_messages && source.kind() == ObjectKind::Message {
            return Err(SceneError::MissingContext { what: "2d" });
        }
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.created.push(id);
        Ok(id)
    }

    fn release_sprite(&mut self, sprite: SpriteId) {
        self.released.push(sprite);
    }

    fn upload_starfield(&mut self, starfield: &Starfield) {
        self.stars_uploaded = starfield.points.len();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.resized = Some((width, height));
    }

    fn render(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        self.last_visible = frame.objects.iter().filter(|o| o.visible).count();
    }

    fn release(&mut self) {
        self.release_calls += 1;
    }
}

pub fn input(messages: &[&str], heart_count: usize) -> GreetingInput {
    let mut input = GreetingInput {
        messages: messages.iter().map(|m| Message::new(*m)).collect(),
        ..GreetingInput::default()
    };
    input.config.heart_count = heart_count;
    input
}

pub fn seeded(seed: u64) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    rand::rngs::StdRng::seed_from_u64(seed)
}
