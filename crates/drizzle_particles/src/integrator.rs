//! # Integrator
//!
//! Semi-implicit Euler over the whole pool, in slot order:
//!
//! ```text
//! life     -= dt
//! velocity += acceleration * dt
//! position += velocity * dt        (uses the updated velocity)
//! dist_sq   = |position - viewer|^2
//! ```
//!
//! A particle whose life reaches zero this frame is not moved; its distance
//! becomes the dead sentinel so the sorter pushes it to the tail.

use glam::Vec3;

use crate::particle::{Particle, DEAD_DISTANCE};

/// Outcome of one integration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Particles alive after the step.
    pub live: usize,
    /// Particles whose life ran out during the step.
    pub died: usize,
}

/// Constant-acceleration integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    acceleration: Vec3,
}

impl Integrator {
    /// Creates an integrator for a uniform acceleration field.
    #[must_use]
    pub const fn new(acceleration: Vec3) -> Self {
        Self { acceleration }
    }

    /// Acceleration applied to every particle.
    #[inline]
    #[must_use]
    pub const fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Advances every live particle by `dt` seconds.
    ///
    /// # Arguments
    ///
    /// * `particles` - The whole pool
    /// * `dt` - Frame duration in seconds (non-negative)
    /// * `viewer` - Camera position for this frame
    pub fn step(&self, particles: &mut [Particle], dt: f32, viewer: Vec3) -> StepReport {
        debug_assert!(dt >= 0.0, "frame delta must be non-negative, got {dt}");

        let mut report = StepReport::default();
        let dv = self.acceleration * dt;

        for particle in particles.iter_mut() {
            if !particle.is_live() {
                continue;
            }

            particle.remaining_life -= dt;
            if particle.is_live() {
                particle.velocity += dv;
                particle.position += particle.velocity * dt;
                particle.camera_distance_sq = particle.position.distance_squared(viewer);
                report.live += 1;
            } else {
                particle.camera_distance_sq = DEAD_DISTANCE;
                report.died += 1;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_at(position: Vec3, velocity: Vec3, life: f32) -> Particle {
        Particle::new(position, velocity, [255; 4], 1.0, life)
    }

    #[test]
    fn test_semi_implicit_order() {
        let integrator = Integrator::new(Vec3::new(0.0, 2.0, 0.0));
        let mut pool = [live_at(Vec3::ZERO, Vec3::ZERO, 10.0)];

        integrator.step(&mut pool, 0.5, Vec3::ZERO);

        // v = 0 + 2 * 0.5 = 1, then p = 0 + 1 * 0.5 = 0.5
        assert_eq!(pool[0].velocity, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(pool[0].position, Vec3::new(0.0, 0.5, 0.0));
        assert!((pool[0].camera_distance_sq - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_expiring_particle_gets_sentinel() {
        let integrator = Integrator::new(Vec3::ZERO);
        let start = Vec3::new(1.0, 2.0, 3.0);
        let mut pool = [live_at(start, Vec3::ONE, 0.3), Particle::DEAD];

        let report = integrator.step(&mut pool, 0.5, Vec3::ZERO);

        assert_eq!(report, StepReport { live: 0, died: 1 });
        assert!(!pool[0].is_live());
        assert_eq!(pool[0].position, start);
        assert!((pool[0].camera_distance_sq - DEAD_DISTANCE).abs() < f32::EPSILON);
        // Untouched slot keeps its state
        assert_eq!(pool[1], Particle::DEAD);
    }

    #[test]
    fn test_live_count_matches_slots() {
        let integrator = Integrator::new(Vec3::ZERO);
        let mut pool = vec![Particle::DEAD; 8];
        pool[1] = live_at(Vec3::X, Vec3::ZERO, 2.0);
        pool[4] = live_at(Vec3::Y, Vec3::ZERO, 0.1);
        pool[6] = live_at(Vec3::Z, Vec3::ZERO, 5.0);

        let report = integrator.step(&mut pool, 0.25, Vec3::ZERO);

        assert_eq!(report.live, 2);
        assert_eq!(report.died, 1);
        assert_eq!(pool.iter().filter(|p| p.is_live()).count(), report.live);
    }

    #[test]
    fn test_zero_dt_keeps_everything() {
        let integrator = Integrator::new(Vec3::new(0.0, -9.8, 0.0));
        let mut pool = [live_at(Vec3::new(3.0, 0.0, 4.0), Vec3::ZERO, 1.0)];

        let report = integrator.step(&mut pool, 0.0, Vec3::ZERO);

        assert_eq!(report.live, 1);
        assert!((pool[0].camera_distance_sq - 25.0).abs() < 1e-5);
    }
}
