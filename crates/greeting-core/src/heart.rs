//! Attractor particles tracing a pulsing heart curve.
//!
//! Targets are sampled once per activation from three nested copies of the
//! classic parametric heart. Every particle chases one target point, hops
//! along the curve when it arrives, and drags a trail of relaxed history
//! points behind it. The host only reads positions back for drawing.

use crate::config::HeartConfig;
use crate::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::TAU;

/// Unscaled heart curve point at angle `theta`. Screen y grows downward.
pub fn heart_curve(theta: f64) -> Vec2 {
    let x = theta.sin().powi(3);
    let y = -(15.0 * theta.cos()
        - 5.0 * (2.0 * theta).cos()
        - 2.0 * (3.0 * theta).cos()
        - (4.0 * theta).cos());
    Vec2::new(x as f32, y as f32)
}

/// Sample the curve at `step` radians for each `[sx, sy]` layer, layer by layer.
pub fn sample_heart_layers(step: f64, layers: &[[f32; 2]]) -> Vec<Vec2> {
    let mut points = Vec::new();
    if step <= 0.0 {
        return points;
    }
    for &[sx, sy] in layers {
        let mut theta = 0.0;
        while theta < TAU {
            points.push(heart_curve(theta) * Vec2::new(sx, sy));
            theta += step;
        }
    }
    points
}

/// Nonlinear phase driving the heartbeat: slow through the peak, fast on the
/// way back down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeartClock {
    pub t: f64,
}

impl HeartClock {
    /// Pulse scale for the current phase, then step the phase.
    pub fn advance(&mut self) -> f32 {
        let n = -self.t.cos();
        let scale = (1.0 + n) * 0.5;
        self.t += Self::increment(self.t);
        scale as f32
    }

    pub fn increment(t: f64) -> f64 {
        let n = -t.cos();
        let rate = if t.sin() < 0.0 {
            HEART_CLOCK_FALLING
        } else if n > HEART_CLOCK_PEAK_THRESHOLD {
            HEART_CLOCK_PEAK
        } else {
            HEART_CLOCK_RISING
        };
        rate * HEART_CLOCK_SCALE
    }
}

#[derive(Clone, Debug)]
pub struct HeartParticle {
    pub velocity: Vec2,
    pub target: usize,
    /// +1 or -1: which way the particle walks along the curve.
    pub direction: i32,
    pub speed: f32,
    pub force: f32,
    /// Head first. Length is fixed at creation.
    pub trail: Box<[Vec2]>,
}

impl HeartParticle {
    pub fn head(&self) -> Vec2 {
        self.trail[0]
    }
}

pub struct HeartSimulator {
    origins: Vec<Vec2>,
    targets: Vec<Vec2>,
    particles: Vec<HeartParticle>,
    clock: HeartClock,
    center: Vec2,
    config: HeartConfig,
    rng: StdRng,
    last_pulse: f32,
}

impl HeartSimulator {
    /// Fresh particle set over a `width` x `height` overlay, one per target.
    pub fn new(width: f32, height: f32, config: &HeartConfig, mut rng: StdRng) -> Self {
        let origins = sample_heart_layers(config.curve_step, &config.layers);
        let count = origins.len();
        let trail_len = config.trail_len.max(1);
        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            let start = Vec2::new(
                if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 },
                if height > 0.0 { rng.gen_range(0.0..height) } else { 0.0 },
            );
            particles.push(HeartParticle {
                velocity: Vec2::ZERO,
                target: rng.gen_range(0..count),
                direction: 2 * (i % 2) as i32 - 1,
                speed: config.speed.sample(&mut rng),
                force: config.force.sample(&mut rng),
                trail: vec![start; trail_len].into_boxed_slice(),
            });
        }
        let center = Vec2::new(width / 2.0, height / 2.0);
        Self {
            targets: origins.iter().map(|o| *o + center).collect(),
            origins,
            particles,
            clock: HeartClock::default(),
            center,
            config: config.clone(),
            rng,
            last_pulse: 0.0,
        }
    }

    /// One overlay tick: pulse the targets, then move every particle.
    pub fn step(&mut self) {
        let k = self.clock.advance();
        self.last_pulse = k;
        for (target, origin) in self.targets.iter_mut().zip(&self.origins) {
            *target = *origin * k + self.center;
        }

        let count = self.targets.len();
        if count == 0 {
            return;
        }
        let cfg = &self.config;
        for p in self.particles.iter_mut().rev() {
            let goal = self.targets[p.target];
            let d = p.trail[0] - goal;
            let length = d.length();

            if length < cfg.arrive_distance {
                if self.rng.gen::<f32>() < cfg.retarget_chance {
                    p.target = self.rng.gen_range(0..count);
                } else {
                    if self.rng.gen::<f32>() < cfg.flip_chance {
                        p.direction = -p.direction;
                    }
                    p.target = (p.target as i64 + p.direction as i64).rem_euclid(count as i64) as usize;
                }
            }

            if length > 0.0 {
                p.velocity += (-d / length) * p.speed;
            }
            p.trail[0] += p.velocity;
            p.velocity *= p.force;

            for i in 0..p.trail.len() - 1 {
                let lead = p.trail[i];
                let follow = &mut p.trail[i + 1];
                *follow -= (*follow - lead) * cfg.trail_relax;
            }
        }
    }

    pub fn particles(&self) -> &[HeartParticle] {
        &self.particles
    }

    pub fn targets(&self) -> &[Vec2] {
        &self.targets
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Pulse scale used by the most recent `step`.
    pub fn pulse_scale(&self) -> f32 {
        self.last_pulse
    }

    pub fn clock(&self) -> HeartClock {
        self.clock
    }

    /// Where the caption is centered.
    pub fn caption_anchor(&self) -> Vec2 {
        self.center + Vec2::new(0.0, self.config.caption_offset_y)
    }

    pub fn caption(&self) -> &str {
        &self.config.caption
    }
}
