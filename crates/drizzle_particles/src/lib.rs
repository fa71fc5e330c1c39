//! # DRIZZLE Particles
//!
//! CPU particle emitters that feed an instanced, alpha-blended renderer.
//!
//! ## Frame Pipeline (per emitter)
//!
//! ```text
//! dt ──► EmissionController ──► SlotPool::allocate ──► BirthPolicy
//!                                                         │
//! viewer ──► Integrator (semi-implicit Euler + dist²) ◄───┘
//!                 │
//!                 ▼
//!          sort back-to-front ──► PackedAttributes ──► DoubleBuffer::publish
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use drizzle_particles::{Emitter, EmitterConfig};
//!
//! let mut smoke = Emitter::new(&EmitterConfig::smoke())?;
//!
//! loop {
//!     smoke.update(dt, viewer);
//!     renderer.stream(smoke.feed().position_size_bytes(), smoke.feed().color_bytes());
//!     renderer.draw(smoke.mesh(), smoke.draw());
//! }
//! ```
//!
//! Per-frame operations never fail. A full pool keeps spawning by reusing
//! slot 0; the emitter counts and logs those reuses.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod emission;
pub mod emitter;
pub mod error;
pub mod integrator;
pub mod mesh;
pub mod packer;
pub mod particle;
mod presets;
pub mod sampler;
pub mod sort;
pub mod spawn;
pub mod stats;
pub mod viewer;

pub use config::{EmitterConfig, DEFAULT_CAPACITY};
pub use emission::EmissionController;
pub use emitter::Emitter;
pub use error::{ConfigError, ConfigResult};
pub use integrator::{Integrator, StepReport};
pub use mesh::{BillboardMesh, InstancedDraw, MeshKind, Topology};
pub use packer::PackedAttributes;
pub use particle::{Particle, DEAD_DISTANCE};
pub use sampler::{AxisCube, DirectionSampler, EmissionZone, SamplerKind, UnitSphere};
pub use sort::{farther_first, is_back_to_front, sort_back_to_front};
pub use spawn::BirthPolicy;
pub use stats::ParticleStats;
pub use viewer::viewer_position_from_view;
