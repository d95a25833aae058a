// Page wiring, raster and input tuning for the browser host.
// Scene tuning lives in `greeting_core::constants` and the greeting JSON.

// DOM
pub const CONTAINER_ID: &str = "greeting-root";
pub const DATA_ELEMENT_ID: &str = "greeting-data";
pub const SCENE_CANVAS_ID: &str = "greeting-canvas";
pub const OVERLAY_CANVAS_ID: &str = "heart-overlay";
pub const SCENE_Z_INDEX: i32 = 0;
pub const OVERLAY_Z_INDEX: i32 = 10;

// Palette
pub const ROSE: &str = "#FF3D6B";
pub const CRIMSON: &str = "#FF2D5C";
pub const WHITE: &str = "#FFFFFF";
pub const HEART_PARTICLE_FILL: &str = "rgba(255, 107, 157, 1)";

// Message raster
pub const MESSAGE_RASTER_W: u32 = 1024;
pub const MESSAGE_RASTER_H: u32 = 256;
pub const MESSAGE_FONT_PX: f32 = 48.0;
pub const MESSAGE_FONT_FAMILY: &str = "\"Courier New\", monospace";
pub const MESSAGE_GLOW_BLUR: f64 = 20.0;

// Photo raster: square frame plus padding for the glow
pub const PHOTO_FRAME_PX: f32 = 1024.0;
pub const PHOTO_PADDING_PX: f32 = 40.0;
pub const PHOTO_CORNER_RADIUS_PX: f32 = 24.0; // 12 at a 512 reference
pub const PHOTO_TARGET_ASPECT: f32 = 1.0;
pub const PHOTO_GLOW_BLUR: f64 = 50.0;

// Heart raster
pub const HEART_RASTER_PX: u32 = 128;
pub const HEART_SHAPE_PX: f32 = 40.0;
pub const HEART_GLOW_BLUR: f64 = 15.0;

// Overlay caption
pub const CAPTION_FONT: &str = "italic bold 24px Georgia, \"Times New Roman\", serif";
pub const CAPTION_GRADIENT_HALF_WIDTH: f64 = 150.0;
pub const CAPTION_GRADIENT_OFFSET_Y: f64 = 150.0;
pub const CAPTION_GLOW_BLUR: f64 = 20.0;

// Double tap: two touch releases this close in time and space
pub const DOUBLE_TAP_MS: f64 = 300.0;
pub const DOUBLE_TAP_PX: f32 = 30.0;
