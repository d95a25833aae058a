// Host-side tests for page and raster constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_sits_above_scene() {
    assert!(OVERLAY_Z_INDEX > SCENE_Z_INDEX);
    assert_ne!(SCENE_CANVAS_ID, OVERLAY_CANVAS_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rasters_fit_their_content() {
    assert!(MESSAGE_RASTER_W > MESSAGE_RASTER_H);
    assert!((MESSAGE_FONT_PX as u32) < MESSAGE_RASTER_H);
    assert!((HEART_SHAPE_PX as u32) < HEART_RASTER_PX);
    assert!(PHOTO_CORNER_RADIUS_PX * 2.0 < PHOTO_FRAME_PX);
    assert!(PHOTO_PADDING_PX > 0.0);
}

#[test]
fn palette_entries_are_css_hex() {
    for color in [ROSE, CRIMSON, WHITE] {
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn double_tap_window_is_tight() {
    assert!(DOUBLE_TAP_MS > 0.0 && DOUBLE_TAP_MS <= 500.0);
    assert!(DOUBLE_TAP_PX > 0.0);
}
