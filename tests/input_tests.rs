// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn pointer_ndc_maps_corners_and_center() {
    assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn pointer_ndc_degenerate_viewport_is_centered() {
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(10.0, 10.0, 800.0, 0.0), Vec2::ZERO);
}

#[test]
fn two_quick_close_taps_make_a_double_tap() {
    let mut d = DoubleTap::default();
    assert!(!d.tap(1000.0, Vec2::new(100.0, 100.0)));
    assert!(d.tap(1200.0, Vec2::new(110.0, 105.0)));
}

#[test]
fn slow_second_tap_starts_over() {
    let mut d = DoubleTap::default();
    assert!(!d.tap(1000.0, Vec2::new(100.0, 100.0)));
    assert!(!d.tap(1400.0, Vec2::new(100.0, 100.0)));
    // the slow tap became the new first tap
    assert!(d.tap(1500.0, Vec2::new(100.0, 100.0)));
}

#[test]
fn distant_second_tap_is_not_a_double_tap() {
    let mut d = DoubleTap::default();
    assert!(!d.tap(1000.0, Vec2::new(100.0, 100.0)));
    assert!(!d.tap(1100.0, Vec2::new(200.0, 100.0)));
}

#[test]
fn third_tap_after_hit_starts_over() {
    let mut d = DoubleTap::default();
    d.tap(0.0, Vec2::ZERO);
    assert!(d.tap(100.0, Vec2::ZERO));
    assert!(!d.tap(200.0, Vec2::ZERO));
}

#[test]
fn reset_forgets_pending_tap() {
    let mut d = DoubleTap::default();
    d.tap(0.0, Vec2::ZERO);
    d.reset();
    assert!(!d.tap(100.0, Vec2::ZERO));
}

#[test]
fn out_of_order_timestamps_do_not_pair() {
    let mut d = DoubleTap::default();
    d.tap(500.0, Vec2::ZERO);
    assert!(!d.tap(400.0, Vec2::ZERO));
}

#[test]
fn dblclick_right_after_a_double_tap_is_an_echo() {
    let mut d = DoubleTap::default();
    d.tap(1000.0, Vec2::ZERO);
    assert!(d.tap(1150.0, Vec2::ZERO));
    assert!(d.is_echo(1180.0));
    assert!(!d.is_echo(1500.0));
}

#[test]
fn dblclick_without_touch_is_never_an_echo() {
    let d = DoubleTap::default();
    assert!(!d.is_echo(0.0));
    assert!(!d.is_echo(1e6));
}

#[test]
fn reset_keeps_the_last_hit_for_echo_checks() {
    let mut d = DoubleTap::default();
    d.tap(0.0, Vec2::ZERO);
    assert!(d.tap(100.0, Vec2::ZERO));
    d.tap(150.0, Vec2::ZERO);
    d.reset();
    assert!(d.is_echo(200.0));
    assert!(!d.tap(250.0, Vec2::ZERO));
}
