//! Visual-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! consumes them to build camera matrices and to describe scene lighting.

use crate::config::CameraConfig;
use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, config.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: config.fov_deg.to_radians(),
            znear: config.near,
            zfar: config.far,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Move the eye a fraction of the way toward `goal` in x/y; keeps looking at the origin.
    pub fn ease_toward(&mut self, goal: Vec2, factor: f32) {
        self.eye.x += (goal.x - self.eye.x) * factor;
        self.eye.y += (goal.y - self.eye.y) * factor;
        self.target = Vec3::ZERO;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: u32,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: u32,
    pub intensity: f32,
    pub range: f32,
    pub position: Vec3,
}

/// Lights carried with the scene. Sprites render unlit.
#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub points: Vec<PointLight>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: AMBIENT_RGB,
                intensity: AMBIENT_INTENSITY,
            },
            points: vec![
                PointLight {
                    color: KEY_LIGHT_RGB,
                    intensity: POINT_LIGHT_INTENSITY,
                    range: POINT_LIGHT_RANGE,
                    position: Vec3::from(KEY_LIGHT_POSITION),
                },
                PointLight {
                    color: FILL_LIGHT_RGB,
                    intensity: POINT_LIGHT_INTENSITY,
                    range: POINT_LIGHT_RANGE,
                    position: Vec3::from(FILL_LIGHT_POSITION),
                },
            ],
        }
    }
}

/// Split a packed `0xRRGGBB` into linear-ish unit floats.
pub fn rgb_components(color: u32) -> [f32; 3] {
    [
        ((color >> 16) & 0xff) as f32 / 255.0,
        ((color >> 8) & 0xff) as f32 / 255.0,
        (color & 0xff) as f32 / 255.0,
    ]
}
