//! Explosion particle bursts

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::{Particle, Rgb};

/// Warm explosion tones
pub const EXPLOSION_PALETTE: [Rgb; 3] = [[255, 140, 60], [245, 210, 70], [230, 60, 60]];

/// Vertical squash so bursts read wider than tall
const BURST_VERTICAL_SCALE: f32 = 0.7;

/// Append `count` particles flying out of `origin`
pub fn spawn_burst<R: Rng>(particles: &mut Vec<Particle>, rng: &mut R, origin: Vec2, count: usize) {
    particles.reserve(count);
    for _ in 0..count {
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let speed = rng.random_range(140.0..=440.0);
        let vel = Vec2::new(
            angle.cos() * speed,
            angle.sin() * speed * BURST_VERTICAL_SCALE,
        );
        let lifetime = rng.random_range(0.45..=1.05);
        let size = rng.random_range(4.0..=12.0);
        let color = *EXPLOSION_PALETTE.choose(&mut *rng).unwrap_or(&EXPLOSION_PALETTE[0]);
        particles.push(Particle::new(origin, vel, lifetime, color, size));
    }
}

/// Advance every particle and drop the expired ones in place
///
/// Returns how many expired this step.
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) -> usize {
    let before = particles.len();
    particles.retain_mut(|p| {
        p.update(dt);
        p.is_alive()
    });
    before - particles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_ranges() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        let origin = Vec2::new(360.0, 960.0);
        spawn_burst(&mut particles, &mut rng, origin, 200);
        assert_eq!(particles.len(), 200);
        for p in &particles {
            assert_eq!(p.pos, origin);
            assert_eq!(p.age, 0.0);
            assert!((0.45..=1.05).contains(&p.lifetime));
            assert!((4.0..=12.0).contains(&p.size));
            assert!(EXPLOSION_PALETTE.contains(&p.color));
            // Horizontal speed is unscaled, vertical is flattened
            assert!(p.vel.x.abs() <= 440.0 + 1e-3);
            assert!(p.vel.y.abs() <= 440.0 * 0.7 + 1e-3);
        }
    }

    #[test]
    fn test_lifetime_boundary() {
        let mut particles = vec![Particle::new(Vec2::ZERO, Vec2::ZERO, 0.5, [255, 140, 60], 4.0)];
        particles[0].age = 0.48;
        update_particles(&mut particles, 0.01);
        // age 0.49 < 0.5
        assert_eq!(particles.len(), 1);
        update_particles(&mut particles, 0.02);
        // age 0.51
        assert!(particles.is_empty());
    }

    #[test]
    fn test_count_is_spawned_minus_expired() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, Vec2::ZERO, 28);
        let mut expired = 0;
        for _ in 0..30 {
            expired += update_particles(&mut particles, 1.0 / 60.0);
            assert_eq!(particles.len(), 28 - expired);
        }
        // Nothing outlives 1.05 s
        for _ in 0..40 {
            expired += update_particles(&mut particles, 1.0 / 60.0);
        }
        assert_eq!(expired, 28);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_remaining_fades_out() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0, [255, 140, 60], 4.0);
        assert_eq!(p.remaining(), 1.0);
        p.age = 0.25;
        assert!((p.remaining() - 0.75).abs() < 1e-6);
        p.age = 2.0;
        assert_eq!(p.remaining(), 0.0);
    }
}
