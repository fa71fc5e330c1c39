//! # Double Buffer
//!
//! Two copies of a frame product. The producer fills the back copy while the
//! consumer reads the front copy; `publish` swaps them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut feed = DoubleBuffer::<Vec<[f32; 4]>>::default();
//!
//! loop {
//!     let back = feed.back_mut();
//!     back.clear();
//!     back.extend(simulate());
//!
//!     feed.publish();
//!     upload(feed.front());
//! }
//! ```

/// A pair of buffers with a back (write) side and a front (read) side.
///
/// The back buffer keeps whatever it held two publishes ago; producers are
/// expected to clear or overwrite it. Capacity is retained across swaps, so
/// a producer that clears and refills never reallocates once warm.
#[derive(Clone, Debug, Default)]
pub struct DoubleBuffer<T> {
    /// The two buffers.
    buffers: [T; 2],
    /// Index of the current back buffer (0 or 1).
    /// Front buffer is always (`write_index` ^ 1).
    write_index: usize,
    /// Number of publishes so far.
    frame_count: u64,
}

impl<T> DoubleBuffer<T> {
    /// Creates a double buffer from two initial buffers.
    ///
    /// `back` is written first; `front` is what a consumer sees before the
    /// first publish.
    #[must_use]
    pub fn new(back: T, front: T) -> Self {
        Self {
            buffers: [back, front],
            write_index: 0,
            frame_count: 0,
        }
    }

    /// Creates both buffers with the same constructor.
    #[must_use]
    pub fn from_fn(mut make: impl FnMut() -> T) -> Self {
        Self::new(make(), make())
    }

    /// Returns the buffer being written this frame.
    #[inline]
    #[must_use]
    pub fn back(&self) -> &T {
        &self.buffers[self.write_index]
    }

    /// Returns the buffer being written this frame, mutably.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.buffers[self.write_index]
    }

    /// Returns the last published buffer.
    #[inline]
    #[must_use]
    pub fn front(&self) -> &T {
        &self.buffers[self.write_index ^ 1]
    }

    /// Makes the back buffer visible as the front buffer.
    #[inline]
    pub fn publish(&mut self) {
        self.write_index ^= 1;
        self.frame_count += 1;
    }

    /// Returns the number of frames published.
    #[inline]
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the index of the back buffer (for debugging).
    #[inline]
    #[must_use]
    pub const fn back_index(&self) -> usize {
        self.write_index
    }
}
