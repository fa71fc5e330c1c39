//! Stock emitters: a rising smoke plume and a rain sheet.

use glam::Vec3;

use crate::config::{EmitterConfig, DEFAULT_CAPACITY};
use crate::mesh::MeshKind;
use crate::sampler::{EmissionZone, SamplerKind};

impl EmitterConfig {
    /// Grey plume rising out of a single point and drifting away from the
    /// camera.
    #[must_use]
    pub fn smoke() -> Self {
        Self {
            name: "smoke".to_owned(),
            capacity: DEFAULT_CAPACITY,
            emission_rate: 10_000.0,
            max_spawn_per_frame: 160,
            lifespan_seconds: 1.0,
            main_direction: Vec3::new(0.0, 1.5, -10.0),
            spread: 2.5,
            sampler: SamplerKind::Cube,
            color_min: [170, 170, 170, 0],
            color_max: [179, 179, 179, 85],
            size_min: 0.1,
            size_max: 0.6,
            acceleration: Vec3::new(0.0, 2.0, 0.0),
            zone: EmissionZone::Point {
                position: Vec3::new(2.0, 1.5, -7.0),
            },
            mesh: MeshKind::Quad,
            seed: 0x5EED_0001,
        }
    }

    /// Blue drops falling straight down from a 10 x 24 lattice.
    ///
    /// The rate is high enough that the per-frame ceiling always governs.
    #[must_use]
    pub fn rain() -> Self {
        Self {
            name: "rain".to_owned(),
            capacity: DEFAULT_CAPACITY,
            emission_rate: 1_000_000.0,
            max_spawn_per_frame: 16_000,
            lifespan_seconds: 6.0,
            main_direction: Vec3::new(0.0, -10.0, 1.0),
            spread: 0.0,
            sampler: SamplerKind::Cube,
            color_min: [26, 35, 126, 50],
            color_max: [35, 44, 135, 50],
            size_min: 0.1,
            size_max: 0.6,
            acceleration: Vec3::ZERO,
            zone: EmissionZone::Grid {
                origin: Vec3::new(-5.0, 10.0, -18.0),
                cells: [10, 1, 24],
            },
            mesh: MeshKind::Raindrop,
            seed: 0x5EED_0002,
        }
    }
}
