use greeting_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn simulator(seed: u64) -> HeartSimulator {
    HeartSimulator::new(1280.0, 720.0, &HeartConfig::default(), StdRng::seed_from_u64(seed))
}

#[test]
fn default_layers_give_189_targets() {
    let points = sample_heart_layers(0.1, &constants::HEART_LAYERS);
    assert_eq!(points.len(), 189);
    assert_eq!(points.len(), sample_heart_layers(0.1, &constants::HEART_LAYERS).len());
    assert_eq!(simulator(1).targets().len(), 189);
    assert_eq!(simulator(1).particles().len(), 189);
}

#[test]
fn sampling_is_deterministic() {
    let a = sample_heart_layers(0.1, &constants::HEART_LAYERS);
    let b = sample_heart_layers(0.1, &constants::HEART_LAYERS);
    assert_eq!(a, b);
}

#[test]
fn layers_are_nested_by_scale() {
    let points = sample_heart_layers(0.1, &constants::HEART_LAYERS);
    let widest = |layer: &[glam::Vec2]| layer.iter().map(|p| p.x.abs()).fold(0.0, f32::max);
    assert!(widest(&points[0..63]) > widest(&points[63..126]));
    assert!(widest(&points[63..126]) > widest(&points[126..189]));
}

#[test]
fn clock_follows_three_way_step_rule() {
    // rising, well before the peak
    assert!((HeartClock::increment(0.5) - 0.01).abs() < 1e-12);
    // rising, past the -cos > 0.8 threshold
    assert!((HeartClock::increment(2.8) - 0.002).abs() < 1e-12);
    // sin < 0: falling half
    assert!((HeartClock::increment(4.0) - 0.09).abs() < 1e-12);
}

#[test]
fn clock_pulse_starts_at_zero_and_stays_in_unit_range() {
    let mut clock = HeartClock::default();
    assert_eq!(clock.advance(), 0.0);
    for _ in 0..5000 {
        let k = clock.advance();
        assert!((0.0..=1.0).contains(&k));
    }
}

#[test]
fn target_indices_stay_in_bounds() {
    let mut sim = simulator(3);
    let count = sim.targets().len();
    for _ in 0..600 {
        sim.step();
        assert!(sim.particles().iter().all(|p| p.target < count));
    }
}

#[test]
fn trail_length_is_fixed() {
    let mut sim = simulator(4);
    for _ in 0..200 {
        sim.step();
    }
    assert!(sim.particles().iter().all(|p| p.trail.len() == 50));
}

#[test]
fn directions_alternate_and_only_flip_sign() {
    let mut sim = simulator(5);
    for (i, p) in sim.particles().iter().enumerate() {
        assert_eq!(p.direction, if i % 2 == 0 { -1 } else { 1 });
    }
    for _ in 0..300 {
        sim.step();
    }
    assert!(sim.particles().iter().all(|p| p.direction.abs() == 1));
}

#[test]
fn particle_parameters_are_in_range() {
    let sim = simulator(6);
    for p in sim.particles() {
        assert!(p.speed >= 5.0 && p.speed < 6.0);
        assert!(p.force >= 0.7 && p.force < 0.9);
        assert!(p.head().x >= 0.0 && p.head().x < 1280.0);
        assert!(p.head().y >= 0.0 && p.head().y < 720.0);
    }
}

#[test]
fn particles_converge_toward_the_heart() {
    let mut sim = simulator(8);
    for _ in 0..400 {
        sim.step();
    }
    let center = sim.center();
    let far = sim
        .particles()
        .iter()
        .filter(|p| (p.head() - center).length() > 400.0)
        .count();
    assert!(far < sim.particles().len() / 10);
    assert!(sim.particles().iter().all(|p| p.head().is_finite()));
}

#[test]
fn targets_follow_the_pulse() {
    let mut sim = simulator(9);
    sim.step();
    // first pulse is zero: every target collapses onto the center
    assert_eq!(sim.pulse_scale(), 0.0);
    assert!(sim.targets().iter().all(|t| *t == sim.center()));
    assert_eq!(sim.caption_anchor(), sim.center() + glam::Vec2::new(0.0, 300.0));
}

#[test]
fn particle_on_its_target_stays_finite() {
    let config = HeartConfig {
        layers: vec![[0.0, 0.0]],
        ..HeartConfig::default()
    };
    let mut sim = HeartSimulator::new(0.0, 0.0, &config, StdRng::seed_from_u64(1));
    for _ in 0..10 {
        sim.step();
    }
    assert!(sim.particles().iter().all(|p| p.head().is_finite()));
}
