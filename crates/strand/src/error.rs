//! Sequence error types.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Errors that can occur during sequence operations.
///
/// Allocation errors leave the sequence exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// Checked access past the live range.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// The requested element count cannot be represented as an allocation
    /// of at most `isize::MAX` bytes.
    CapacityOverflow {
        /// Number of elements requested.
        requested: usize,
    },
    /// The allocator refused to hand out the backing storage.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
        /// The error reported by the allocator.
        source: TryReserveError,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements exceed isize::MAX bytes")
            }
            Self::AllocationFailed { requested, .. } => {
                write!(f, "allocation of {requested} elements failed")
            }
        }
    }
}

impl Error for SequenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Unwrap the result of an allocating operation for the infallible API.
///
/// Mirrors how `Vec` reports capacity overflow: the error text becomes the
/// panic message.
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T, SequenceError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = SequenceError::OutOfRange { index: 3, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 3 out of range for sequence of length 3"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn allocation_failure_exposes_allocator_error() {
        let source = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        let err = SequenceError::AllocationFailed {
            requested: usize::MAX,
            source,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("allocation of"));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn or_panic_uses_display_text() {
        or_panic::<()>(Err(SequenceError::CapacityOverflow {
            requested: usize::MAX,
        }));
    }
}
