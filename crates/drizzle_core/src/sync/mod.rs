//! # Frame Hand-off
//!
//! ## The Problem
//!
//! ```text
//! Simulation: WRITES packed attributes for frame N
//! Renderer:   STREAMS packed attributes from frame N-1
//!
//! One buffer: the renderer sees a half-written frame
//! ```
//!
//! ## The Solution: Double Buffering
//!
//! ```text
//! Frame N:
//!   Simulation writes to Buffer A (back)
//!   Renderer reads from Buffer B (front, last published frame)
//!
//! publish():
//!   Buffer A becomes front, Buffer B becomes back
//! ```

mod double_buffer;

pub use double_buffer::DoubleBuffer;
