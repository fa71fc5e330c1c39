//! # Attribute Packer
//!
//! Serializes the live prefix of a sorted pool into the two per-instance
//! streams the renderer uploads:
//!
//! | Stream | Element | Contents |
//! |--------|---------|----------|
//! | `position_size` | `[f32; 4]` | x, y, z, size |
//! | `colors` | `[u8; 4]` | r, g, b, a (normalized by the shader) |
//!
//! Both streams hold exactly `live_count` elements, in pool order.

use crate::particle::Particle;

/// The two instance streams of one emitter for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedAttributes {
    position_size: Vec<[f32; 4]>,
    colors: Vec<[u8; 4]>,
}

impl PackedAttributes {
    /// Creates empty streams sized for a pool of `capacity` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            position_size: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Replaces the contents with the live slots of `particles`.
    ///
    /// Never reallocates if the streams were created with at least the pool's
    /// capacity.
    pub fn pack(&mut self, particles: &[Particle]) {
        self.position_size.clear();
        self.colors.clear();

        for particle in particles.iter().filter(|p| p.is_live()) {
            self.position_size.push(particle.position_size());
            self.colors.push(particle.color);
        }
    }

    /// Number of packed instances.
    #[inline]
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.position_size.len()
    }

    /// Returns `true` if nothing was packed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position_size.is_empty()
    }

    /// Position and size per instance.
    #[inline]
    #[must_use]
    pub fn position_size(&self) -> &[[f32; 4]] {
        &self.position_size
    }

    /// Color per instance.
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[[u8; 4]] {
        &self.colors
    }

    /// Position/size stream as raw bytes for buffer upload.
    #[must_use]
    pub fn position_size_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.position_size)
    }

    /// Color stream as raw bytes for buffer upload.
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}
