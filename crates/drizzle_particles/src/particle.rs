//! Particle record stored in every pool slot.

use drizzle_core::Slot;
use glam::Vec3;

/// Camera distance marker for slots that hold no live particle.
pub const DEAD_DISTANCE: f32 = -1.0;

/// Remaining life given to never-used slots.
pub const UNUSED_LIFE: f32 = -1.0;

/// A single particle (one per pool slot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// World-space velocity in units per second.
    pub velocity: Vec3,
    /// Color (RGBA, 8 bits per channel).
    pub color: [u8; 4],
    /// Billboard half-extent.
    pub size: f32,
    /// Seconds left to live. Live iff `> 0`.
    pub remaining_life: f32,
    /// Squared distance to the viewer at the last update, or
    /// [`DEAD_DISTANCE`] for dead slots. Only used for ordering.
    pub camera_distance_sq: f32,
}

impl Particle {
    /// An unused slot.
    pub const DEAD: Self = Self {
        position: Vec3::ZERO,
        velocity: Vec3::ZERO,
        color: [0; 4],
        size: 0.0,
        remaining_life: UNUSED_LIFE,
        camera_distance_sq: DEAD_DISTANCE,
    };

    /// Creates a freshly born particle.
    ///
    /// The camera distance is filled in by the first integration pass.
    #[must_use]
    pub const fn new(position: Vec3, velocity: Vec3, color: [u8; 4], size: f32, life: f32) -> Self {
        Self {
            position,
            velocity,
            color,
            size,
            remaining_life: life,
            camera_distance_sq: DEAD_DISTANCE,
        }
    }

    /// Is this particle alive?
    #[inline]
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.remaining_life > 0.0
    }

    /// Position and size packed for the instance buffer.
    #[inline]
    #[must_use]
    pub fn position_size(&self) -> [f32; 4] {
        [self.position.x, self.position.y, self.position.z, self.size]
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::DEAD
    }
}

impl Slot for Particle {
    /// Any slot that is not live may be recycled, including one whose life
    /// ran out to exactly zero.
    #[inline]
    fn is_free(&self) -> bool {
        !self.is_live()
    }
}
