//! # DRIZZLE
//!
//! Smoke and rain over a shared camera, driven by a headless frame loop.
//!
//! ## Frame
//!
//! ```text
//! FrameClock::tick ──► dt
//! OrbitCamera::view ──► viewer position
//!                         │
//!                         ▼
//!   Scene::update ── smoke.update(dt, viewer)
//!                 └─ rain.update(dt, viewer)
//!                         │
//!                         ▼
//!   UploadQueue::submit ──► consumer thread
//! ```
//!
//! ## Modules
//!
//! - `scene`: Scene description, loading, and the running emitter set
//! - `frame_clock`: Delta time and FPS reporting
//! - `camera`: Synthetic orbiting viewer
//! - `upload`: Bounded hand-off of packed feeds to a consumer thread

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera;
pub mod error;
pub mod frame_clock;
pub mod scene;
pub mod upload;

// Re-export the layers below
pub use drizzle_core as core;
pub use drizzle_particles as particles;

pub use camera::OrbitCamera;
pub use error::{SceneError, SceneResult};
pub use frame_clock::{FrameClock, FrameTick, FPS_WINDOW};
pub use scene::{Scene, SceneConfig};
pub use upload::{InstanceBatch, UploadFrame, UploadQueue, UploadTotals};
