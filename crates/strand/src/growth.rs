//! The canonical growth policy.
//!
//! Every reallocation triggered by an append, insert, or resize-past-capacity
//! picks its new capacity here. The policy is observable through
//! [`Sequence::capacity`](crate::Sequence::capacity) and callers may rely on
//! it: an empty sequence grows to exactly the required size (so a single
//! append yields capacity 1), after which capacity at least doubles.

/// New capacity for a sequence of `capacity` that must hold `required`
/// elements.
///
/// Returns `max(capacity * 2, required)`. Doubling saturates instead of
/// overflowing; the allocation itself then reports the overflow.
///
/// ```
/// use strand::growth::next_capacity;
///
/// assert_eq!(next_capacity(0, 1), 1);
/// assert_eq!(next_capacity(1, 2), 2);
/// assert_eq!(next_capacity(4, 5), 8);
/// assert_eq!(next_capacity(4, 20), 20);
/// ```
pub const fn next_capacity(capacity: usize, required: usize) -> usize {
    let doubled = capacity.saturating_mul(2);
    if doubled > required {
        doubled
    } else {
        required
    }
}
