//! # Memory Management
//!
//! Pre-allocated slot pools for zero-allocation simulation.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once at startup. During a frame:
//! - No heap allocations
//! - No allocation failures
//! - Predictable, bounded search cost

mod pool;

pub use pool::{Allocation, PoolHandle, Slot, SlotPool, SATURATION_SLOT};
