// Authoritative tuning values shared by the scene, the animation loop and the
// heart overlay. `SceneConfig::default()` is built from these.

// Spawn volume (world units)
pub const SPAWN_X: [f32; 2] = [-35.0, 35.0];
pub const SPAWN_Y: [f32; 2] = [10.0, 100.0];
pub const SPAWN_Z: [f32; 2] = [-25.0, 25.0];

// Wraparound: below the threshold an object reappears inside the band
pub const RESPAWN_THRESHOLD_Y: f32 = -45.0;
pub const RESPAWN_BAND_Y: [f32; 2] = [45.0, 55.0];

// Horizontal / depth clamp (clip, not reflect)
pub const CLAMP_X: f32 = 40.0;
pub const CLAMP_Z: f32 = 30.0;

// Per-kind vertical fall speed (per tick)
pub const MESSAGE_FALL_SPEED: [f32; 2] = [-0.14, -0.08];
pub const IMAGE_FALL_SPEED: [f32; 2] = [-0.10, -0.06];
pub const HEART_FALL_SPEED: [f32; 2] = [-0.10, -0.05];

// Per-kind horizontal/depth drift jitter (symmetric half-width)
pub const MESSAGE_DRIFT: f32 = 0.005;
pub const IMAGE_DRIFT: f32 = 0.006;
pub const HEART_DRIFT: f32 = 0.004;

// Per-kind rotation deltas (symmetric half-width per axis)
pub const MESSAGE_SPIN: [f32; 3] = [0.004, 0.004, 0.005];
pub const IMAGE_SPIN: [f32; 3] = [0.003, 0.003, 0.006];
pub const HEART_SPIN: [f32; 3] = [0.0, 0.0, 0.01];

// Swing speed ranges
pub const MESSAGE_SWING_SPEED: [f32; 2] = [0.5, 1.0];
pub const IMAGE_SWING_SPEED: [f32; 2] = [0.4, 0.8];
pub const HEART_SWING_SPEED: [f32; 2] = [0.4, 1.0];

// Sprite world sizes, scale jitter and opacity
pub const MESSAGE_SIZE: [f32; 2] = [24.0, 6.0];
pub const IMAGE_SIZE: [f32; 2] = [6.0, 6.0];
pub const HEART_SIZE: [f32; 2] = [1.0, 1.0];
pub const HEART_SCALE: [f32; 2] = [1.2, 2.0];
pub const MESSAGE_OPACITY: f32 = 0.85;
pub const IMAGE_OPACITY: f32 = 1.0;
pub const HEART_OPACITY: f32 = 0.75;

pub const DEFAULT_HEART_COUNT: usize = 100;

// Motion
pub const CLOCK_STEP: f32 = 0.016; // nominal tick, not wall-clock
pub const SWING_X_AMPLITUDE: f32 = 0.02;
pub const SWING_Z_AMPLITUDE: f32 = 0.015;
pub const SWING_Z_RATE: f32 = 0.7;
pub const WIND_X_GAIN: f32 = 0.05;
pub const WIND_Z_GAIN: f32 = 0.03;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 35.0;
pub const CAMERA_EASING: f32 = 0.05; // new = old + (target - old) * easing
pub const CAMERA_POINTER_GAIN: f32 = 5.0;

pub const BACKGROUND_RGB: u32 = 0x0a0a0f;

// Lighting
pub const AMBIENT_RGB: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_RGB: u32 = 0xff3d6b;
pub const FILL_LIGHT_RGB: u32 = 0xff2d5c;
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_RANGE: f32 = 100.0;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const FILL_LIGHT_POSITION: [f32; 3] = [-10.0, -10.0, 10.0];

// Starfield
pub const STAR_COUNT: usize = 1500;
pub const STAR_EXTENT: f32 = 200.0; // cube side, centered on the origin
pub const STAR_SIZE: f32 = 0.3;
pub const STAR_OPACITY: f32 = 0.8;
pub const STAR_SPIN_PER_TICK: f32 = 0.0002;

// Heart overlay
pub const HEART_CURVE_STEP: f64 = 0.1;
pub const HEART_LAYERS: [[f32; 2]; 3] = [[210.0, 13.0], [150.0, 9.0], [90.0, 5.0]];
pub const HEART_TRAIL_LEN: usize = 50;
pub const HEART_PARTICLE_SPEED: [f32; 2] = [5.0, 6.0];
pub const HEART_PARTICLE_FORCE: [f32; 2] = [0.7, 0.9];
pub const HEART_ARRIVE_DISTANCE: f32 = 10.0;
pub const HEART_RETARGET_CHANCE: f32 = 0.05;
pub const HEART_FLIP_CHANCE: f32 = 0.01;
pub const HEART_TRAIL_RELAX: f32 = 0.4;
pub const HEART_CAPTION_OFFSET_Y: f32 = 300.0;
pub const HEART_CAPTION: &str = "Happy birthday, my love";

// Heart clock stepping: increment × 0.01 depending on phase
pub const HEART_CLOCK_SCALE: f64 = 0.01;
pub const HEART_CLOCK_FALLING: f64 = 9.0; // sin(t) < 0
pub const HEART_CLOCK_PEAK: f64 = 0.2; // -cos(t) > threshold
pub const HEART_CLOCK_RISING: f64 = 1.0;
pub const HEART_CLOCK_PEAK_THRESHOLD: f64 = 0.8;
