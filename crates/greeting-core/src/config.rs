//! Greeting input and tuning configuration.
//!
//! The embedding page supplies a JSON document with the messages, photo
//! locators and (optionally) overrides for any tuning value. Every section is
//! defaulted, so `{"messages": [{"text": "Hi"}]}` is a complete document.

use crate::constants::*;
use crate::error::SceneError;
use rand::Rng;
use serde::Deserialize;

/// One floating text line.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Message {
    pub text: String,
    /// Font size in raster pixels; the renderer's default applies when absent.
    #[serde(default)]
    pub size: Option<f32>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
        }
    }
}

/// Everything the page hands to the scene at mount time.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GreetingInput {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub config: SceneConfig,
}

impl GreetingInput {
    /// Parse the page's greeting document.
    /// Parse the page's greeting document. Tuning ranges are checked here so
    /// nothing downstream has to sample a range it cannot.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let input: Self = serde_json::from_str(json)?;
        input.config.validate()?;
        Ok(input)
    }
}

/// Closed interval written as `[min, max]` in JSON.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "[f32; 2]")]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Symmetric interval `[-half, half]`.
    pub const fn symmetric(half: f32) -> Self {
        Self {
            min: -half,
            max: half,
        }
    }

    /// Uniform sample in `[min, max)`. A degenerate span, or one too wide to
    /// measure in `f32`, yields `min`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        let width = self.max - self.min;
        if width > 0.0 && width.is_finite() {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    /// Finite ends, `min <= max`, and a width that is itself finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && (self.max - self.min).is_finite()
    }
}

impl From<[f32; 2]> for Span {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Box that new and respawned objects are scattered in.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SpawnVolume {
    pub x: Span,
    pub y: Span,
    pub z: Span,
}

impl Default for SpawnVolume {
    fn default() -> Self {
        Self {
            x: SPAWN_X.into(),
            y: SPAWN_Y.into(),
            z: SPAWN_Z.into(),
        }
    }
}

/// Per-kind motion and appearance ranges. Overrides must be complete.
#[derive(Clone, Debug, Deserialize)]
pub struct SpawnProfile {
    pub fall_speed: Span,
    pub drift: Span,
    pub spin: [Span; 3],
    pub swing_speed: Span,
    pub size: [f32; 2],
    pub scale: Span,
    pub opacity: f32,
}

impl SpawnProfile {
    pub fn message() -> Self {
        Self {
            fall_speed: MESSAGE_FALL_SPEED.into(),
            drift: Span::symmetric(MESSAGE_DRIFT),
            spin: MESSAGE_SPIN.map(Span::symmetric),
            swing_speed: MESSAGE_SWING_SPEED.into(),
            size: MESSAGE_SIZE,
            scale: Span::new(1.0, 1.0),
            opacity: MESSAGE_OPACITY,
        }
    }

    pub fn image() -> Self {
        Self {
            fall_speed: IMAGE_FALL_SPEED.into(),
            drift: Span::symmetric(IMAGE_DRIFT),
            spin: IMAGE_SPIN.map(Span::symmetric),
            swing_speed: IMAGE_SWING_SPEED.into(),
            size: IMAGE_SIZE,
            scale: Span::new(1.0, 1.0),
            opacity: IMAGE_OPACITY,
        }
    }

    pub fn heart() -> Self {
        Self {
            fall_speed: HEART_FALL_SPEED.into(),
            drift: Span::symmetric(HEART_DRIFT),
            spin: HEART_SPIN.map(Span::symmetric),
            swing_speed: HEART_SWING_SPEED.into(),
            size: HEART_SIZE,
            scale: HEART_SCALE.into(),
            opacity: HEART_OPACITY,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RespawnConfig {
    pub threshold_y: f32,
    pub band_y: Span,
}

impl Default for RespawnConfig {
    fn default() -> Self {
        Self {
            threshold_y: RESPAWN_THRESHOLD_Y,
            band_y: RESPAWN_BAND_Y.into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ClampBounds {
    pub x: f32,
    pub z: f32,
}

impl Default for ClampBounds {
    fn default() -> Self {
        Self {
            x: CLAMP_X,
            z: CLAMP_Z,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub clock_step: f32,
    pub swing_x: f32,
    pub swing_z: f32,
    pub swing_z_rate: f32,
    pub wind_x: f32,
    pub wind_z: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            clock_step: CLOCK_STEP,
            swing_x: SWING_X_AMPLITUDE,
            swing_z: SWING_Z_AMPLITUDE,
            swing_z_rate: SWING_Z_RATE,
            wind_x: WIND_X_GAIN,
            wind_z: WIND_Z_GAIN,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub easing: f32,
    pub pointer_gain: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            distance: CAMERA_Z,
            easing: CAMERA_EASING,
            pointer_gain: CAMERA_POINTER_GAIN,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    pub extent: f32,
    pub size: f32,
    pub opacity: f32,
    pub spin_per_tick: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            extent: STAR_EXTENT,
            size: STAR_SIZE,
            opacity: STAR_OPACITY,
            spin_per_tick: STAR_SPIN_PER_TICK,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HeartConfig {
    pub curve_step: f64,
    pub layers: Vec<[f32; 2]>,
    pub trail_len: usize,
    pub speed: Span,
    pub force: Span,
    pub arrive_distance: f32,
    pub retarget_chance: f32,
    pub flip_chance: f32,
    pub trail_relax: f32,
    pub caption: String,
    pub caption_offset_y: f32,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            curve_step: HEART_CURVE_STEP,
            layers: HEART_LAYERS.to_vec(),
            trail_len: HEART_TRAIL_LEN,
            speed: HEART_PARTICLE_SPEED.into(),
            force: HEART_PARTICLE_FORCE.into(),
            arrive_distance: HEART_ARRIVE_DISTANCE,
            retarget_chance: HEART_RETARGET_CHANCE,
            flip_chance: HEART_FLIP_CHANCE,
            trail_relax: HEART_TRAIL_RELAX,
            caption: HEART_CAPTION.to_string(),
            caption_offset_y: HEART_CAPTION_OFFSET_Y,
        }
    }
}

/// All tuning for one scene instance.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub spawn: SpawnVolume,
    pub message: SpawnProfile,
    pub image: SpawnProfile,
    pub heart: SpawnProfile,
    /// Number of heart sprites (the page variants use 40 or 100).
    pub heart_count: usize,
    pub respawn: RespawnConfig,
    pub bounds: ClampBounds,
    pub motion: MotionConfig,
    pub camera: CameraConfig,
    pub background: u32,
    pub starfield: StarfieldConfig,
    pub overlay: HeartConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spawn: SpawnVolume::default(),
            message: SpawnProfile::message(),
            image: SpawnProfile::image(),
            heart: SpawnProfile::heart(),
            heart_count: DEFAULT_HEART_COUNT,
            respawn: RespawnConfig::default(),
            bounds: ClampBounds::default(),
            motion: MotionConfig::default(),
            camera: CameraConfig::default(),
            background: BACKGROUND_RGB,
            starfield: StarfieldConfig::default(),
            overlay: HeartConfig::default(),
        }
    }
}

impl SpawnProfile {
    fn spans(&self, kind: &'static str, out: &mut Vec<(String, Span)>) {
        out.push((format!("{kind}.fall_speed"), self.fall_speed));
        out.push((format!("{kind}.drift"), self.drift));
        for (axis, span) in ["x", "y", "z"].iter().zip(self.spin) {
            out.push((format!("{kind}.spin.{axis}"), span));
        }
        out.push((format!("{kind}.swing_speed"), self.swing_speed));
        out.push((format!("{kind}.scale"), self.scale));
    }
}

impl SceneConfig {
    /// Every sampled range, named by its JSON path.
    fn spans(&self) -> Vec<(String, Span)> {
        let mut out = vec![
            ("spawn.x".to_string(), self.spawn.x),
            ("spawn.y".to_string(), self.spawn.y),
            ("spawn.z".to_string(), self.spawn.z),
            ("respawn.band_y".to_string(), self.respawn.band_y),
            ("overlay.speed".to_string(), self.overlay.speed),
            ("overlay.force".to_string(), self.overlay.force),
        ];
        self.message.spans("message", &mut out);
        self.image.spans("image", &mut out);
        self.heart.spans("heart", &mut out);
        out
    }

    /// Reject ranges that cannot be sampled.
    pub fn validate(&self) -> Result<(), SceneError> {
        match self.spans().into_iter().find(|(_, span)| !span.is_valid()) {
            Some((field, span)) => Err(SceneError::InvalidRange {
                field,
                min: span.min,
                max: span.max,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn degenerate_span_samples_its_minimum() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Span::new(0.0, 0.0).sample(&mut rng), 0.0);
        assert_eq!(Span::new(2.0, 1.0).sample(&mut rng), 2.0);
    }

    #[test]
    fn unmeasurable_span_samples_its_minimum() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(Span::new(-3e38, 3e38).sample(&mut rng), -3e38);
        assert_eq!(Span::new(0.0, f32::INFINITY).sample(&mut rng), 0.0);
        assert!(Span::new(f32::NAN, 1.0).sample(&mut rng).is_nan());
    }

    #[test]
    fn span_samples_stay_half_open() {
        let mut rng = StdRng::seed_from_u64(9);
        let span = Span::new(45.0, 55.0);
        for _ in 0..1000 {
            let v = span.sample(&mut rng);
            assert!((45.0..55.0).contains(&v));
        }
    }
}
