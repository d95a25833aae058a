use crate::config::{SceneConfig, SpawnProfile, SpawnVolume};
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Opaque handle to a sprite texture owned by the render backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Message,
    Image,
    Heart,
}

/// Which scene layer the visitor is looking at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Heart,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Normal => DisplayMode::Heart,
            DisplayMode::Heart => DisplayMode::Normal,
        }
    }
}

impl ObjectKind {
    /// Messages step aside while the heart overlay is up; photos and hearts stay.
    pub fn visible_in(self, mode: DisplayMode) -> bool {
        match (self, mode) {
            (_, DisplayMode::Normal) => true,
            (ObjectKind::Message, DisplayMode::Heart) => false,
            (ObjectKind::Image | ObjectKind::Heart, DisplayMode::Heart) => true,
        }
    }
}

/// One drifting sprite.
#[derive(Clone, Debug)]
pub struct FallingObject {
    pub sprite: SpriteId,
    pub kind: ObjectKind,
    pub position: Vec3,
    /// Displacement applied on the last tick (base + swing + wind).
    pub velocity: Vec3,
    base_velocity: Vec3,
    pub rotation: Vec3,
    pub rotation_delta: Vec3,
    pub swing_offset: f32,
    pub swing_speed: f32,
    /// World-space sprite width and height.
    pub size: Vec2,
    pub opacity: f32,
    pub visible: bool,
}

impl FallingObject {
    pub fn new(kind: ObjectKind, sprite: SpriteId, position: Vec3, base_velocity: Vec3) -> Self {
        Self {
            sprite,
            kind,
            position,
            velocity: base_velocity,
            base_velocity,
            rotation: Vec3::ZERO,
            rotation_delta: Vec3::ZERO,
            swing_offset: 0.0,
            swing_speed: 0.0,
            size: Vec2::ONE,
            opacity: 1.0,
            visible: true,
        }
    }

    pub fn with_swing(mut self, offset: f32, speed: f32) -> Self {
        self.swing_offset = offset;
        self.swing_speed = speed;
        self
    }

    pub fn with_rotation_delta(mut self, delta: Vec3) -> Self {
        self.rotation_delta = delta;
        self
    }

    pub fn with_appearance(mut self, size: Vec2, opacity: f32) -> Self {
        self.size = size;
        self.opacity = opacity;
        self
    }

    /// Random placement and motion drawn from the kind's profile.
    pub fn spawn<R: Rng>(
        kind: ObjectKind,
        sprite: SpriteId,
        profile: &SpawnProfile,
        volume: &SpawnVolume,
        rng: &mut R,
    ) -> Self {
        let position = Vec3::new(
            volume.x.sample(rng),
            volume.y.sample(rng),
            volume.z.sample(rng),
        );
        let base_velocity = Vec3::new(
            profile.drift.sample(rng),
            profile.fall_speed.sample(rng),
            profile.drift.sample(rng),
        );
        let rotation_delta = Vec3::new(
            profile.spin[0].sample(rng),
            profile.spin[1].sample(rng),
            profile.spin[2].sample(rng),
        );
        let scale = profile.scale.sample(rng);
        let size = Vec2::from(profile.size) * scale;
        let swing_offset = rng.gen_range(0.0..TAU);
        let swing_speed = profile.swing_speed.sample(rng);
        Self::new(kind, sprite, position, base_velocity)
            .with_rotation_delta(rotation_delta)
            .with_swing(swing_offset, swing_speed)
            .with_appearance(size, profile.opacity)
    }

    pub fn base_velocity(&self) -> Vec3 {
        self.base_velocity
    }

    /// Advance one tick. Returns true when the object wrapped to the top.
    pub fn advance<R: Rng>(
        &mut self,
        clock: f32,
        wind: Vec2,
        config: &SceneConfig,
        rng: &mut R,
    ) -> bool {
        let motion = &config.motion;
        let respawn = &config.respawn;
        let bounds = &config.bounds;
        let phase = clock * self.swing_speed + self.swing_offset;
        let swing_x = phase.sin() * motion.swing_x;
        let swing_z = (clock * self.swing_speed * motion.swing_z_rate + self.swing_offset).cos()
            * motion.swing_z;

        self.velocity = Vec3::new(
            self.base_velocity.x + swing_x + wind.x,
            self.base_velocity.y,
            self.base_velocity.z + swing_z + wind.y,
        );
        self.position += self.velocity;
        self.rotation += self.rotation_delta;

        let wrapped = self.position.y < respawn.threshold_y;
        if wrapped {
            self.position = Vec3::new(
                config.spawn.x.sample(rng),
                respawn.band_y.sample(rng),
                config.spawn.z.sample(rng),
            );
        }

        if self.position.x.abs() > bounds.x {
            self.position.x = bounds.x.copysign(self.position.x);
        }
        if self.position.z.abs() > bounds.z {
            self.position.z = bounds.z.copysign(self.position.z);
        }
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_table_is_exhaustive() {
        assert!(ObjectKind::Message.visible_in(DisplayMode::Normal));
        assert!(!ObjectKind::Message.visible_in(DisplayMode::Heart));
        assert!(ObjectKind::Image.visible_in(DisplayMode::Heart));
        assert!(ObjectKind::Heart.visible_in(DisplayMode::Heart));
    }

    #[test]
    fn mode_toggle_round_trips() {
        assert_eq!(DisplayMode::Normal.toggled().toggled(), DisplayMode::Normal);
    }
}
