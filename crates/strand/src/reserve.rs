//! Reservation markers for preallocating construction.

/// Carries a desired capacity into [`Sequence`](crate::Sequence) construction.
///
/// Built by [`reserve`]. Constructing a sequence from a marker yields an
/// empty sequence whose capacity is exactly the marker's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReserveMarker {
    capacity: usize,
}

impl ReserveMarker {
    /// A marker requesting `capacity` preallocated slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Build a [`ReserveMarker`] for `capacity` slots.
///
/// ```
/// use strand::Sequence;
///
/// let seq: Sequence<u32> = Sequence::from(strand::reserve(16));
/// assert_eq!(seq.len(), 0);
/// assert_eq!(seq.capacity(), 16);
/// ```
pub const fn reserve(capacity: usize) -> ReserveMarker {
    ReserveMarker::new(capacity)
}
