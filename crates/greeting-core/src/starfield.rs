use crate::config::StarfieldConfig;
use glam::Vec3;
use rand::Rng;

/// Static point cloud behind the sprites. Only its Y rotation changes.
#[derive(Clone, Debug)]
pub struct Starfield {
    pub points: Vec<Vec3>,
    pub rotation_y: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Starfield {
    pub fn generate<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> Self {
        let half = config.extent / 2.0;
        let mut coord = || {
            if half > 0.0 {
                rng.gen_range(-half..half)
            } else {
                0.0
            }
        };
        let points = (0..config.count)
            .map(|_| Vec3::new(coord(), coord(), coord()))
            .collect();
        Self {
            points,
            rotation_y: 0.0,
            size: config.size,
            opacity: config.opacity,
        }
    }

    pub fn spin(&mut self, delta: f32) {
        self.rotation_y = (self.rotation_y + delta) % std::f32::consts::TAU;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stars_fill_the_cube() {
        let cfg = StarfieldConfig::default();
        let field = Starfield::generate(&cfg, &mut StdRng::seed_from_u64(1));
        assert_eq!(field.points.len(), cfg.count);
        let half = cfg.extent / 2.0;
        assert!(field
            .points
            .iter()
            .all(|p| p.abs().max_element() <= half));
    }
}
