//! Birth policy: the randomized initial state of a new particle.

use glam::Vec3;
use rand::{Rng, RngCore};

use crate::config::EmitterConfig;
use crate::particle::Particle;
use crate::sampler::{uniform, DirectionSampler, EmissionZone};

/// Initial-state distribution of an emitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthPolicy {
    zone: EmissionZone,
    main_direction: Vec3,
    spread: f32,
    color_min: [u8; 4],
    color_max: [u8; 4],
    size_min: f32,
    size_max: f32,
    lifespan: f32,
}

impl BirthPolicy {
    /// Extracts the birth parameters of a validated configuration.
    #[must_use]
    pub fn from_config(config: &EmitterConfig) -> Self {
        Self {
            zone: config.zone,
            main_direction: config.main_direction,
            spread: config.spread,
            color_min: config.color_min,
            color_max: config.color_max,
            size_min: config.size_min,
            size_max: config.size_max,
            lifespan: config.lifespan_seconds,
        }
    }

    /// Draws a new particle.
    ///
    /// Velocity is `main_direction + spread * sampler()`. Color channels are
    /// uniform within their inclusive bands.
    pub fn spawn(&self, sampler: &dyn DirectionSampler, rng: &mut dyn RngCore) -> Particle {
        let position = self.zone.sample(rng);

        let velocity = if self.spread > 0.0 {
            self.main_direction + sampler.sample(rng) * self.spread
        } else {
            self.main_direction
        };

        let mut color = [0u8; 4];
        for (channel, value) in color.iter_mut().enumerate() {
            let (min, max) = (self.color_min[channel], self.color_max[channel]);
            *value = if max > min {
                rng.gen_range(min..=max)
            } else {
                min
            };
        }

        let size = uniform(rng, self.size_min, self.size_max);

        Particle::new(position, velocity, color, size, self.lifespan)
    }
}
