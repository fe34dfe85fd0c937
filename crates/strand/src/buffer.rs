//! Owning handle to a fixed-length heap array.
//!
//! An [`OwnedBuffer`] is either null (length 0, no allocation) or owns exactly
//! `len` constructed elements. It never grows or shrinks in place: a
//! [`Sequence`](crate::Sequence) that needs more room builds a fresh buffer
//! and swaps it in. Dropping the handle drops every element it owns, live or
//! not, and releases the allocation.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::SequenceError;

/// Exclusive owner of a heap array of `T`, or nothing.
///
/// Move-only: `OwnedBuffer` deliberately does not implement `Clone`.
pub struct OwnedBuffer<T> {
    /// `None` is the null sentinel. A `Some` slice is never empty.
    items: Option<Box<[T]>>,
}

impl<T> OwnedBuffer<T> {
    /// The null buffer: no allocation, length 0.
    pub const fn null() -> Self {
        Self { items: None }
    }

    /// Allocate `len` default-constructed elements.
    ///
    /// `len == 0` yields the null buffer without touching the allocator.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails or overflows; see [`try_new`](Self::try_new).
    #[track_caller]
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        crate::error::or_panic(Self::try_new(len))
    }

    /// Allocate `len` default-constructed elements, reporting allocation
    /// failure as an error.
    ///
    /// If `T::default` panics part way through, the elements built so far
    /// are dropped and the allocation is released before unwinding continues.
    pub fn try_new(len: usize) -> Result<Self, SequenceError>
    where
        T: Default,
    {
        if len == 0 {
            return Ok(Self::null());
        }
        let mut items = allocate(len)?;
        items.resize_with(len, T::default);
        Ok(Self::adopt(items.into_boxed_slice()))
    }

    /// Take ownership of an already-built array.
    ///
    /// An empty array is normalised to the null buffer.
    pub fn adopt(items: Box<[T]>) -> Self {
        if items.is_empty() {
            Self::null()
        } else {
            Self { items: Some(items) }
        }
    }

    /// Give up ownership of the array, leaving this handle null.
    ///
    /// Nothing is dropped; the caller now owns the elements.
    #[must_use = "releasing a buffer and ignoring the result drops its elements"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.items.take()
    }

    /// Pointer to the first element, or null when nothing is owned.
    pub fn get(&self) -> *const T {
        match &self.items {
            Some(items) => items.as_ptr(),
            None => std::ptr::null(),
        }
    }

    /// Mutable pointer to the first element, or null when nothing is owned.
    pub fn get_mut(&mut self) -> *mut T {
        match &mut self.items {
            Some(items) => items.as_mut_ptr(),
            None => std::ptr::null_mut(),
        }
    }

    /// Whether an array is owned.
    pub fn is_nonempty(&self) -> bool {
        self.items.is_some()
    }

    /// Number of elements owned (0 for the null buffer).
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }

    /// Whether the buffer is the null sentinel.
    pub fn is_empty(&self) -> bool {
        !self.is_nonempty()
    }

    /// All owned elements.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_deref().unwrap_or(&[])
    }

    /// All owned elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.items {
            Some(items) => items,
            None => &mut [],
        }
    }

    /// Exchange arrays with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.items, &mut other.items);
    }
}

/// Reserve room for exactly `len` elements without constructing any.
///
/// Rejects requests whose byte size exceeds `isize::MAX` up front so the
/// two failure modes stay distinguishable.
pub(crate) fn allocate<T>(len: usize) -> Result<Vec<T>, SequenceError> {
    let fits = len
        .checked_mul(std::mem::size_of::<T>())
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !fits {
        return Err(SequenceError::CapacityOverflow { requested: len });
    }
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|source| SequenceError::AllocationFailed {
            requested: len,
            source,
        })?;
    Ok(items)
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.items {
            Some(items) => f.debug_tuple("OwnedBuffer").field(items).finish(),
            None => f.write_str("OwnedBuffer(null)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_test_utils::{Fragile, Tracked};

    #[test]
    fn zero_length_is_null() {
        let buf: OwnedBuffer<u32> = OwnedBuffer::new(0);
        assert!(!buf.is_nonempty());
        assert!(buf.get().is_null());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn new_default_initialises_every_slot() {
        let buf: OwnedBuffer<u32> = OwnedBuffer::new(4);
        assert!(buf.is_nonempty());
        assert!(!buf.get().is_null());
        assert_eq!(buf.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn index_reads_and_writes() {
        let mut buf: OwnedBuffer<i32> = OwnedBuffer::new(3);
        buf[1] = 7;
        assert_eq!(buf[1], 7);
        assert_eq!(buf.as_slice(), &[0, 7, 0]);
    }

    #[test]
    fn release_leaves_null_and_keeps_elements() {
        let mut buf = OwnedBuffer::adopt(vec![1, 2, 3].into_boxed_slice());
        let released = buf.release();
        assert!(!buf.is_nonempty());
        assert_eq!(released.as_deref(), Some(&[1, 2, 3][..]));
        assert!(buf.release().is_none());
    }

    #[test]
    fn adopt_empty_is_null() {
        let buf: OwnedBuffer<u8> = OwnedBuffer::adopt(Vec::new().into_boxed_slice());
        assert!(buf.is_empty());
    }

    #[test]
    fn swap_exchanges_arrays() {
        let mut a = OwnedBuffer::adopt(vec![1].into_boxed_slice());
        let mut b = OwnedBuffer::null();
        let a_ptr = a.get();
        a.swap(&mut b);
        assert!(a.get().is_null());
        assert_eq!(b.get(), a_ptr);
        assert_eq!(b.as_slice(), &[1]);
    }

    #[test]
    fn drop_releases_every_element() {
        let before = Tracked::live();
        {
            let buf: OwnedBuffer<Tracked> = OwnedBuffer::new(5);
            assert_eq!(Tracked::live(), before + 5);
            drop(buf);
        }
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn panicking_default_leaks_nothing() {
        let before = Tracked::live();
        Fragile::arm_default(2);
        let result = std::panic::catch_unwind(|| OwnedBuffer::<(Tracked, Fragile)>::new(4));
        Fragile::disarm();
        assert!(result.is_err());
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn oversized_request_is_capacity_overflow() {
        let err = OwnedBuffer::<u64>::try_new(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            SequenceError::CapacityOverflow {
                requested: usize::MAX
            }
        );
    }

    #[test]
    fn debug_shows_null() {
        let buf: OwnedBuffer<u8> = OwnedBuffer::null();
        assert_eq!(format!("{buf:?}"), "OwnedBuffer(null)");
    }
}
