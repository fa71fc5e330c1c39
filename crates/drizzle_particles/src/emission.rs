//! # Emission Controller
//!
//! Converts elapsed time into a number of births.
//!
//! The count is `floor(dt * rate)` capped at a per-frame ceiling. Fractional
//! births are dropped, not carried into the next frame, so very low rates at
//! high frame rates emit nothing. The ceiling keeps a long hitch (a dragged
//! window, a breakpoint) from flooding the pool in one frame.

/// Per-emitter birth-rate policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionController {
    /// Particles per second.
    emission_rate: f32,
    /// Ceiling on births in a single frame.
    max_spawn_per_frame: usize,
}

impl EmissionController {
    /// Creates a controller.
    #[must_use]
    pub const fn new(emission_rate: f32, max_spawn_per_frame: usize) -> Self {
        Self {
            emission_rate,
            max_spawn_per_frame,
        }
    }

    /// Particles per second.
    #[inline]
    #[must_use]
    pub const fn emission_rate(&self) -> f32 {
        self.emission_rate
    }

    /// Per-frame ceiling.
    #[inline]
    #[must_use]
    pub const fn max_spawn_per_frame(&self) -> usize {
        self.max_spawn_per_frame
    }

    /// Number of particles to spawn for a frame of `dt` seconds.
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame duration in seconds. Must be non-negative.
    #[must_use]
    pub fn particles_to_spawn(&self, dt: f32) -> usize {
        debug_assert!(dt >= 0.0, "frame delta must be non-negative, got {dt}");

        let wanted = (dt * self.emission_rate).floor();
        if wanted.is_nan() || wanted <= 0.0 {
            return 0;
        }
        // Saturating float->int cast; the ceiling bounds it anyway
        (wanted as usize).min(self.max_spawn_per_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_of_rate() {
        let controller = EmissionController::new(10_000.0, 160);
        // 10000 / 128 = 78.125 (below ceiling)
        assert_eq!(controller.particles_to_spawn(1.0 / 128.0), 78);
        assert_eq!(controller.particles_to_spawn(1.0 / 4096.0), 2);
    }

    #[test]
    fn test_long_frame_hits_ceiling() {
        let controller = EmissionController::new(10_000.0, 160);
        assert_eq!(controller.particles_to_spawn(10.0), 160);
        assert_eq!(controller.particles_to_spawn(0.02), 160);
    }

    #[test]
    fn test_zero_dt_spawns_nothing() {
        let controller = EmissionController::new(1_000_000.0, 16_000);
        assert_eq!(controller.particles_to_spawn(0.0), 0);
    }

    #[test]
    fn test_fraction_is_dropped() {
        let controller = EmissionController::new(30.0, 10);
        // 30 * (1/60) = 0.5 -> nothing this frame
        assert_eq!(controller.particles_to_spawn(1.0 / 60.0), 0);
    }

    #[test]
    fn test_huge_rate_does_not_overflow() {
        let controller = EmissionController::new(f32::MAX, 7);
        assert_eq!(controller.particles_to_spawn(1_000.0), 7);
    }
}
