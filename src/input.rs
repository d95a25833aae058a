use crate::constants::{DOUBLE_TAP_MS, DOUBLE_TAP_PX};
use glam::Vec2;

/// Window client coordinates to normalized device coordinates, y up.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tap {
    at_ms: f64,
    pos: Vec2,
}

/// Recognizes two touch releases close in time and space as one double tap.
///
/// Mobile browsers follow a touch double tap with a synthesized `dblclick`;
/// `is_echo` tells the dblclick handler to skip it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleTap {
    last: Option<Tap>,
    last_hit_ms: Option<f64>,
}

impl DoubleTap {
    /// Feed one tap; true when it completes a double tap. The detector
    /// forgets both taps after a hit so a third tap starts over.
    pub fn tap(&mut self, at_ms: f64, pos: Vec2) -> bool {
        let current = Tap { at_ms, pos };
        match self.last {
            Some(prev)
                if at_ms - prev.at_ms <= DOUBLE_TAP_MS
                    && at_ms >= prev.at_ms
                    && prev.pos.distance(pos) <= DOUBLE_TAP_PX =>
            {
                self.last = None;
                self.last_hit_ms = Some(at_ms);
                true
            }
            _ => {
                self.last = Some(current);
                false
            }
        }
    }

    /// True when a `dblclick` at `at_ms` trails a double tap already handled.
    pub fn is_echo(&self, at_ms: f64) -> bool {
        self.last_hit_ms
            .is_some_and(|hit| at_ms >= hit && at_ms - hit <= DOUBLE_TAP_MS)
    }

    /// Forget a pending first tap; the last recognized hit is kept.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
