//! Per-frame emitter counters.

use std::fmt;

/// Snapshot of one emitter after an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleStats {
    /// Total slots in the pool
    pub pool_size: usize,
    /// Live particles (equals the packed instance count)
    pub live_count: usize,
    /// Particles spawned this frame
    pub spawned_this_frame: usize,
    /// Particles that died this frame
    pub died_this_frame: usize,
    /// Births that overwrote slot 0 because the pool was full
    pub forced_reuses: usize,
    /// Frames updated so far, including this one
    pub frame: u64,
}

impl ParticleStats {
    /// Fraction of the pool in use, in `[0, 1]`.
    #[must_use]
    pub fn occupancy(&self) -> f32 {
        if self.pool_size == 0 {
            0.0
        } else {
            self.live_count as f32 / self.pool_size as f32
        }
    }

    /// Returns `true` if the saturation fallback fired this frame.
    #[inline]
    #[must_use]
    pub const fn is_saturated(&self) -> bool {
        self.forced_reuses > 0
    }
}

impl fmt::Display for ParticleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} live (+{} -{}), {} forced",
            self.live_count,
            self.pool_size,
            self.spawned_this_frame,
            self.died_this_frame,
            self.forced_reuses
        )
    }
}
