//! The growable contiguous sequence.
//!
//! A [`Sequence`] pairs an [`OwnedBuffer`] with a logical length. Slots
//! `[0, len)` are live; slots `[len, capacity)` hold default or stale values
//! that are never handed out. Capacity only changes when a mutator needs
//! more room, at which point a complete replacement buffer is built first
//! and the live prefix is swapped across. A panic from `T::default` or
//! `T::clone` during that build therefore leaves the sequence untouched.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::buffer::{allocate, OwnedBuffer};
use crate::error::{or_panic, SequenceError};
use crate::growth::next_capacity;
use crate::reserve::ReserveMarker;

/// A growable, contiguous, heap-allocated sequence of `T`.
///
/// Growth follows [`next_capacity`]: appending to a full sequence of
/// capacity `c` reallocates to `max(2c, len + 1)`. Capacity never shrinks.
///
/// ```
/// use strand::{seq, Sequence};
///
/// let mut s: Sequence<i32> = seq![1, 2, 4];
/// let pos = s.insert(2, 3);
/// assert_eq!(s[pos], 3);
/// assert_eq!(s, [1, 2, 3, 4]);
/// ```
pub struct Sequence<T> {
    /// Number of live elements. Always `<= items.len()`.
    size: usize,
    /// Backing storage. Its length is the capacity.
    items: OwnedBuffer<T>,
}

impl<T> Sequence<T> {
    /// An empty sequence with no allocation.
    pub const fn new() -> Self {
        Self {
            size: 0,
            items: OwnedBuffer::null(),
        }
    }

    /// Wrap fully-built storage; every element becomes live.
    pub(crate) fn from_storage(items: Vec<T>) -> Self {
        Self {
            size: items.len(),
            items: OwnedBuffer::adopt(items.into_boxed_slice()),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Checked access to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, SequenceError> {
        self.get(index).ok_or(SequenceError::OutOfRange {
            index,
            len: self.size,
        })
    }

    /// Checked mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        let len = self.size;
        self.get_mut(index)
            .ok_or(SequenceError::OutOfRange { index, len })
    }

    /// The element at `index`, or `None` past the live range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The element at `index` mutably, or `None` past the live range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The first live element.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The last live element.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Raw pointer to the first slot (null when nothing is allocated).
    ///
    /// `end() - begin() == len()`, measured in units of `size_of::<T>()`;
    /// for zero-sized `T` the span is degenerate and both pointers coincide.
    /// Any mutator that reallocates invalidates the pointer; dereferencing
    /// it is the caller's responsibility.
    pub fn begin(&mut self) -> *mut T {
        self.items.get_mut()
    }

    /// Raw pointer one past the last live element.
    pub fn end(&mut self) -> *mut T {
        let size = self.size;
        self.begin().wrapping_add(size)
    }

    /// Read-only counterpart of [`begin`](Self::begin).
    pub fn cbegin(&self) -> *const T {
        self.items.get()
    }

    /// Read-only counterpart of [`end`](Self::end).
    pub fn cend(&self) -> *const T {
        self.cbegin().wrapping_add(self.size)
    }

    /// Drop the logical length to zero. Capacity and buffer are untouched.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Drop the last live element from the logical range.
    ///
    /// The physical value stays in its slot until overwritten or the buffer
    /// is dropped. Must not be called on an empty sequence; debug builds
    /// assert this and release builds leave an empty sequence unchanged.
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back on empty sequence");
        self.size = self.size.saturating_sub(1);
    }

    /// Exchange contents with `other`. Never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Move the contents out, leaving `self` empty with no allocation.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T: Default> Sequence<T> {
    /// `len` default-constructed elements; capacity equals `len`.
    #[track_caller]
    pub fn with_len(len: usize) -> Self {
        or_panic(Self::try_with_len(len))
    }

    /// Fallible [`with_len`](Self::with_len).
    pub fn try_with_len(len: usize) -> Result<Self, SequenceError> {
        Ok(Self {
            size: len,
            items: OwnedBuffer::try_new(len)?,
        })
    }

    /// An empty sequence with exactly `marker.capacity()` slots.
    #[track_caller]
    pub fn with_reservation(marker: ReserveMarker) -> Self {
        or_panic(Self::try_with_reservation(marker))
    }

    /// Fallible [`with_reservation`](Self::with_reservation).
    pub fn try_with_reservation(marker: ReserveMarker) -> Result<Self, SequenceError> {
        let mut seq = Self::new();
        seq.try_reserve(marker.capacity())?;
        Ok(seq)
    }

    /// Grow capacity to exactly `new_capacity` if it is larger than the
    /// current one. Length and live elements are unchanged.
    #[track_caller]
    pub fn reserve(&mut self, new_capacity: usize) {
        or_panic(self.try_reserve(new_capacity))
    }

    /// Fallible [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), SequenceError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.reallocate(new_capacity)
    }

    /// Set the length to `new_size`.
    ///
    /// Shrinking only moves the logical end. Growing fills the new slots
    /// with `T::default()`, reallocating to
    /// `max(2 * capacity, new_size)` when the buffer is too small.
    #[track_caller]
    pub fn resize(&mut self, new_size: usize) {
        or_panic(self.try_resize(new_size))
    }

    /// Fallible [`resize`](Self::resize).
    pub fn try_resize(&mut self, new_size: usize) -> Result<(), SequenceError> {
        if new_size <= self.size {
            self.size = new_size;
            return Ok(());
        }
        if new_size <= self.capacity() {
            // Dead slots may hold stale values; reset them before they go live.
            for slot in &mut self.items.as_mut_slice()[self.size..new_size] {
                *slot = T::default();
            }
        } else {
            // A fresh buffer is default-filled past the live prefix already.
            self.grow_to_hold(new_size)?;
        }
        self.size = new_size;
        Ok(())
    }

    /// Append `value`, growing by the canonical policy when full.
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        or_panic(self.try_push_back(value))
    }

    /// Fallible [`push_back`](Self::push_back). On error `value` is dropped
    /// and the sequence is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), SequenceError> {
        if self.size == self.capacity() {
            let required = self
                .size
                .checked_add(1)
                .ok_or(SequenceError::CapacityOverflow {
                    requested: usize::MAX,
                })?;
            self.grow_to_hold(required)?;
        }
        self.items[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Insert `value` at position `pos`, shifting `[pos, len)` one slot to
    /// the right. Returns the position of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`, or if growth fails.
    #[track_caller]
    pub fn insert(&mut self, pos: usize, value: T) -> usize {
        or_panic(self.try_insert(pos, value))
    }

    /// Fallible [`insert`](Self::insert). Still panics on `pos > len()`.
    #[track_caller]
    pub fn try_insert(&mut self, pos: usize, value: T) -> Result<usize, SequenceError> {
        assert!(
            pos <= self.size,
            "insertion position (is {pos}) should be <= len (is {})",
            self.size
        );
        self.try_push_back(value)?;
        self.as_mut_slice()[pos..].rotate_right(1);
        Ok(pos)
    }

    /// Remove the element at `pos`, shifting `[pos + 1, len)` one slot to
    /// the left. Returns `pos`, which now holds the following element (or
    /// equals the new `len()` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    #[track_caller]
    pub fn erase(&mut self, pos: usize) -> usize {
        drop(self.remove(pos));
        pos
    }

    /// Remove and return the element at `pos`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    #[track_caller]
    pub fn remove(&mut self, pos: usize) -> T {
        assert!(
            pos < self.size,
            "removal position (is {pos}) should be < len (is {})",
            self.size
        );
        self.as_mut_slice()[pos..].rotate_left(1);
        self.size -= 1;
        std::mem::take(&mut self.items[self.size])
    }

    /// Remove and return the last live element.
    pub fn pop(&mut self) -> Option<T> {
        self.size = self.size.checked_sub(1)?;
        Some(std::mem::take(&mut self.items[self.size]))
    }

    fn grow_to_hold(&mut self, required: usize) -> Result<(), SequenceError> {
        self.reallocate(next_capacity(self.capacity(), required))
    }

    /// Replace the buffer with a default-filled one of `new_capacity` slots
    /// and swap the live prefix across.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), SequenceError> {
        let mut fresh = OwnedBuffer::try_new(new_capacity).inspect_err(|err| {
            tracing::debug!(requested = new_capacity, error = %err, "sequence allocation failed");
        })?;
        let live = self.size;
        fresh.as_mut_slice()[..live].swap_with_slice(&mut self.items.as_mut_slice()[..live]);
        tracing::trace!(
            element = std::any::type_name::<T>(),
            len = live,
            from = self.capacity(),
            to = new_capacity,
            "reallocated sequence buffer"
        );
        self.items = fresh;
        Ok(())
    }
}

impl<T: Clone> Sequence<T> {
    /// `len` clones of `value`; capacity equals `len`.
    #[track_caller]
    pub fn from_elem(len: usize, value: &T) -> Self {
        or_panic(Self::try_from_elem(len, value))
    }

    /// Fallible [`from_elem`](Self::from_elem).
    pub fn try_from_elem(len: usize, value: &T) -> Result<Self, SequenceError> {
        let mut items = allocate(len)?;
        items.resize(len, value.clone());
        Ok(Self::from_storage(items))
    }

    /// Clones of `values` in order; capacity equals `values.len()`.
    #[track_caller]
    pub fn from_slice(values: &[T]) -> Self {
        or_panic(Self::try_from_slice(values))
    }

    /// Fallible [`from_slice`](Self::from_slice).
    pub fn try_from_slice(values: &[T]) -> Result<Self, SequenceError> {
        let mut items = allocate(values.len())?;
        items.extend_from_slice(values);
        Ok(Self::from_storage(items))
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// Append a clone of `value`. `value` itself is never moved from.
    #[track_caller]
    pub fn push_back_cloned(&mut self, value: &T) {
        self.push_back(value.clone());
    }

    /// Insert a clone of `value` at `pos`. `value` itself is never moved
    /// from, including when `pos == len()`.
    #[track_caller]
    pub fn insert_cloned(&mut self, pos: usize, value: &T) -> usize {
        self.insert(pos, value.clone())
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    /// Deep copy of the live elements; the copy's capacity equals its length.
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.size, "index {index} past len {}", self.size);
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size, "index {index} past len {}", self.size);
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_storage(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_storage(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Default> From<ReserveMarker> for Sequence<T> {
    fn from(marker: ReserveMarker) -> Self {
        Self::with_reservation(marker)
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    /// The live elements; dead slots are dropped.
    fn from(mut seq: Sequence<T>) -> Self {
        let size = seq.size;
        let mut items = seq.items.release().map(Vec::from).unwrap_or_default();
        items.truncate(size);
        items
    }
}
