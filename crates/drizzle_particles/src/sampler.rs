//! Randomized birth policies: where a particle appears and which way it
//! is pushed.
//!
//! | Sampler | Distribution |
//! |---------|--------------|
//! | [`AxisCube`] | Each axis uniform in `[-1, 1)`, independent. Not isotropic. |
//! | [`UnitSphere`] | Uniform on the unit sphere. |

use std::f32::consts::TAU;
use std::fmt;

use glam::Vec3;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Produces the perturbation added to an emitter's main direction.
///
/// The result is scaled by the emitter's spread factor, so a sampler should
/// return vectors of roughly unit length.
pub trait DirectionSampler: fmt::Debug + Send {
    /// Draws one perturbation.
    fn sample(&self, rng: &mut dyn RngCore) -> Vec3;
}

/// Independent uniform sample per axis.
///
/// Directions cluster toward the cube's corners. Cheap, and what the smoke
/// look was tuned against.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisCube;

impl DirectionSampler for AxisCube {
    fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
    }
}

/// Uniform direction on the unit sphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitSphere;

impl DirectionSampler for UnitSphere {
    fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let z: f32 = rng.gen_range(-1.0..=1.0);
        let theta: f32 = rng.gen_range(0.0..TAU);
        let ring = (1.0 - z * z).max(0.0).sqrt();
        Vec3::new(ring * theta.cos(), ring * theta.sin(), z)
    }
}

/// Sampler selection for configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerKind {
    /// [`AxisCube`].
    #[default]
    Cube,
    /// [`UnitSphere`].
    Sphere,
}

impl SamplerKind {
    /// Builds the sampler.
    #[must_use]
    pub fn build(self) -> Box<dyn DirectionSampler> {
        match self {
            Self::Cube => Box::new(AxisCube),
            Self::Sphere => Box::new(UnitSphere),
        }
    }
}

/// Region a particle is born in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum EmissionZone {
    /// Every particle starts at the same point.
    Point {
        /// Spawn position.
        position: Vec3,
    },
    /// Uniform within an axis-aligned box.
    Box {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
    /// Integer lattice: `origin + (i, j, k)` with `i < cells[0]` and so on.
    Grid {
        /// Lattice corner.
        origin: Vec3,
        /// Number of lattice points per axis.
        cells: [u32; 3],
    },
}

impl EmissionZone {
    /// Draws a birth position.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        match *self {
            Self::Point { position } => position,
            Self::Box { min, max } => Vec3::new(
                uniform(rng, min.x, max.x),
                uniform(rng, min.y, max.y),
                uniform(rng, min.z, max.z),
            ),
            Self::Grid { origin, cells } => {
                let offset = Vec3::new(
                    rng.gen_range(0..cells[0].max(1)) as f32,
                    rng.gen_range(0..cells[1].max(1)) as f32,
                    rng.gen_range(0..cells[2].max(1)) as f32,
                );
                origin + offset
            }
        }
    }
}

/// Uniform in `[min, max)`, or `min` when the band is empty.
pub(crate) fn uniform(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
