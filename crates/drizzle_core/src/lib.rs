//! # DRIZZLE Core
//!
//! Fixed-capacity storage primitives for per-frame simulation:
//! - Slot pools that recycle dead entries instead of allocating
//! - Double buffers that hand a finished frame to a streaming consumer
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations in hot path** - All memory is pre-allocated
//! 2. **Allocation is total** - A full pool evicts, it never fails or grows
//! 3. **Slot index is identity** - There is no separate handle generation
//!
//! ## Example
//!
//! ```rust,ignore
//! use drizzle_core::{SlotPool, Slot};
//!
//! let mut pool = SlotPool::new(100_000, Particle::dead());
//! let slot = pool.allocate().handle();
//! pool[slot] = Particle::spawn(...);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod memory;
pub mod sync;

pub use memory::{Allocation, PoolHandle, Slot, SlotPool, SATURATION_SLOT};
pub use sync::DoubleBuffer;
