//! # Slot Pool
//!
//! Fixed-capacity recycling pool for objects whose liveness is stored in the
//! object itself (particles, decals, short-lived effects).

use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

/// Slot returned when every slot in the pool is occupied.
///
/// A saturated pool evicts whatever lives here instead of failing. The
/// visible cost is one element disappearing early.
pub const SATURATION_SLOT: usize = 0;

/// An element that can tell whether its slot may be reused.
pub trait Slot {
    /// Returns true if the slot holds nothing worth keeping.
    fn is_free(&self) -> bool;
}

/// Handle to a slot in a pool.
///
/// The index is the identity of whatever currently occupies the slot. Handles
/// are only meaningful until the pool is reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolHandle {
    /// Index into the pool.
    index: usize,
}

impl PoolHandle {
    /// Returns the slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// Outcome of [`SlotPool::allocate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Allocation {
    /// A free slot was found.
    Vacant(PoolHandle),
    /// The pool was saturated; [`SATURATION_SLOT`] was taken over.
    Evicted(PoolHandle),
}

impl Allocation {
    /// Returns the allocated slot regardless of how it was obtained.
    #[inline]
    #[must_use]
    pub const fn handle(self) -> PoolHandle {
        match self {
            Self::Vacant(handle) | Self::Evicted(handle) => handle,
        }
    }

    /// Returns true if a live element was evicted to satisfy the request.
    #[inline]
    #[must_use]
    pub const fn is_eviction(self) -> bool {
        matches!(self, Self::Evicted(_))
    }
}

/// A recycling pool with a remembered search cursor.
///
/// Storage is allocated once. `allocate` scans forward from the slot it last
/// returned, wraps around, and falls back to [`SATURATION_SLOT`] when nothing
/// is free. It never fails and never grows.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Each pool belongs to one frame pipeline.
///
/// # Example
///
/// ```rust,ignore
/// let mut pool = SlotPool::new(10_000, Particle::dead());
///
/// // O(1) amortized, no heap allocation
/// let slot = pool.allocate().handle();
/// pool[slot] = Particle::new(...);
/// ```
#[derive(Clone, Debug)]
pub struct SlotPool<T> {
    /// The storage array.
    storage: Box<[T]>,
    /// Next slot to examine. Always in `[0, capacity)`.
    cursor: usize,
}

impl<T: Slot + Clone> SlotPool<T> {
    /// Creates a new pool with every slot set to `empty`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize, empty: T) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");

        Self {
            storage: vec![empty; capacity].into_boxed_slice(),
            cursor: 0,
        }
    }
}

impl<T: Slot> SlotPool<T> {
    /// Returns the total capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the slot the next search starts from.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of free slots. O(capacity).
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.storage.iter().filter(|slot| slot.is_free()).count()
    }

    /// Finds a slot for a new element.
    ///
    /// Worst case O(capacity) when the pool is nearly full. The slot's
    /// previous contents are left in place for the caller to overwrite.
    pub fn allocate(&mut self) -> Allocation {
        let capacity = self.storage.len();

        let found = (self.cursor..capacity)
            .chain(0..self.cursor)
            .find(|&index| self.storage[index].is_free());

        match found {
            Some(index) => {
                self.cursor = index;
                Allocation::Vacant(PoolHandle { index })
            }
            None => Allocation::Evicted(PoolHandle {
                index: SATURATION_SLOT,
            }),
        }
    }

    /// Returns the handle for a raw slot index, if in range.
    #[inline]
    #[must_use]
    pub fn handle_at(&self, index: usize) -> Option<PoolHandle> {
        (index < self.storage.len()).then_some(PoolHandle { index })
    }

    /// Gets a reference to a slot.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        self.storage.get(handle.index)
    }

    /// Gets a mutable reference to a slot.
    #[inline]
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        self.storage.get_mut(handle.index)
    }

    /// All slots, free or not, in index order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// All slots, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Reorders every slot with `compare`.
    ///
    /// Invalidates outstanding handles. The cursor keeps its index.
    pub fn sort_unstable_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.storage.sort_unstable_by(compare);
    }

    /// Iterates over occupied slots.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (PoolHandle, &T)> {
        self.storage
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_free())
            .map(|(index, slot)| (PoolHandle { index }, slot))
    }
}

impl<T: Slot + Clone> SlotPool<T> {
    /// Resets every slot to `empty` and rewinds the cursor.
    pub fn clear(&mut self, empty: &T) {
        for slot in self.storage.iter_mut() {
            slot.clone_from(empty);
        }
        self.cursor = 0;
    }
}

impl<T> Index<PoolHandle> for SlotPool<T> {
    type Output = T;

    #[inline]
    fn index(&self, handle: PoolHandle) -> &T {
        &self.storage[handle.index]
    }
}

impl<T> IndexMut<PoolHandle> for SlotPool<T> {
    #[inline]
    fn index_mut(&mut self, handle: PoolHandle) -> &mut T {
        &mut self.storage[handle.index]
    }
}
