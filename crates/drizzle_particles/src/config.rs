//! # Emitter Configuration
//!
//! Everything an emitter needs to know, loadable from TOML.
//!
//! ```toml
//! name = "smoke"
//! capacity = 100000
//! emission_rate = 10000.0
//! max_spawn_per_frame = 160
//! lifespan_seconds = 1.0
//! main_direction = [0.0, 1.5, -10.0]
//! spread = 2.5
//! color_min = [170, 170, 170, 0]
//! color_max = [179, 179, 179, 85]
//! size_min = 0.1
//! size_max = 0.6
//! acceleration = [0.0, 2.0, 0.0]
//! zone = { shape = "point", position = [2.0, 1.5, -7.0] }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::mesh::MeshKind;
use crate::sampler::{EmissionZone, SamplerKind};

/// Pool size used by the stock emitters.
pub const DEFAULT_CAPACITY: usize = 100_000;

/// Static description of one emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Name used in logs and scene lookups.
    pub name: String,
    /// Number of pool slots.
    pub capacity: usize,
    /// Particles per second.
    pub emission_rate: f32,
    /// Hard ceiling on births in a single frame.
    pub max_spawn_per_frame: usize,
    /// Initial remaining life in seconds.
    pub lifespan_seconds: f32,
    /// Base velocity of a new particle.
    pub main_direction: Vec3,
    /// Scale applied to the sampled perturbation.
    pub spread: f32,
    /// Perturbation sampler.
    #[serde(default)]
    pub sampler: SamplerKind,
    /// Lowest RGBA value per channel (inclusive).
    pub color_min: [u8; 4],
    /// Highest RGBA value per channel (inclusive).
    pub color_max: [u8; 4],
    /// Smallest birth size.
    pub size_min: f32,
    /// Largest birth size.
    pub size_max: f32,
    /// Constant acceleration applied every frame.
    #[serde(default)]
    pub acceleration: Vec3,
    /// Birth region.
    pub zone: EmissionZone,
    /// Billboard drawn for each particle.
    #[serde(default)]
    pub mesh: MeshKind,
    /// RNG seed for this emitter's stream.
    #[serde(default)]
    pub seed: u64,
}

impl EmitterConfig {
    /// Parses a single emitter from TOML and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input, or any
    /// [`validate`](Self::validate) error.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style seed override.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder-style capacity override.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks ranges and band ordering.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                emitter: self.name.clone(),
            });
        }

        for (field, value) in [
            ("emission_rate", self.emission_rate),
            ("lifespan_seconds", self.lifespan_seconds),
            ("spread", self.spread),
            ("size_min", self.size_min),
            ("size_max", self.size_max),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidScalar {
                    emitter: self.name.clone(),
                    field,
                    value,
                });
            }
        }

        for (field, vector) in [
            ("main_direction", self.main_direction),
            ("acceleration", self.acceleration),
        ] {
            if !vector.is_finite() {
                return Err(ConfigError::NonFiniteVector {
                    emitter: self.name.clone(),
                    field,
                });
            }
        }

        if self.size_min > self.size_max {
            return Err(self.inverted("size", self.size_min, self.size_max));
        }

        for (channel, field) in ["color.r", "color.g", "color.b", "color.a"]
            .into_iter()
            .enumerate()
        {
            let (min, max) = (self.color_min[channel], self.color_max[channel]);
            if min > max {
                return Err(self.inverted(field, f32::from(min), f32::from(max)));
            }
        }

        self.validate_zone()
    }

    fn validate_zone(&self) -> ConfigResult<()> {
        match self.zone {
            EmissionZone::Point { position } if !position.is_finite() => {
                Err(ConfigError::NonFiniteVector {
                    emitter: self.name.clone(),
                    field: "zone.position",
                })
            }
            EmissionZone::Box { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(ConfigError::NonFiniteVector {
                        emitter: self.name.clone(),
                        field: "zone",
                    });
                }
                for (field, lo, hi) in [
                    ("zone.x", min.x, max.x),
                    ("zone.y", min.y, max.y),
                    ("zone.z", min.z, max.z),
                ] {
                    if lo > hi {
                        return Err(self.inverted(field, lo, hi));
                    }
                }
                Ok(())
            }
            EmissionZone::Grid { origin, cells } => {
                if cells.contains(&0) {
                    return Err(ConfigError::EmptyGrid {
                        emitter: self.name.clone(),
                        cells,
                    });
                }
                if !origin.is_finite() {
                    return Err(ConfigError::NonFiniteVector {
                        emitter: self.name.clone(),
                        field: "zone.origin",
                    });
                }
                Ok(())
            }
            EmissionZone::Point { .. } => Ok(()),
        }
    }

    fn inverted(&self, field: &'static str, min: f32, max: f32) -> ConfigError {
        ConfigError::InvertedBand {
            emitter: self.name.clone(),
            field,
            min,
            max,
        }
    }
}
