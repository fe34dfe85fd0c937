//! A growable contiguous sequence container.
//!
//! [`Sequence<T>`] owns one heap buffer and tracks its logical length
//! separately from the buffer's length (the capacity). It supports indexed
//! access, append, insert, erase, resize, reserve, iteration, and
//! lexicographic comparison.
//!
//! # Architecture
//!
//! ```text
//! Sequence<T>
//! ├── size: usize               live elements are [0, size)
//! └── OwnedBuffer<T>            capacity = buffer length
//!     └── Option<Box<[T]>>      None is the null sentinel
//! ```
//!
//! Every allocating mutator goes through the same reallocation step: build
//! a default-filled buffer of the new capacity, swap the live prefix into
//! it, drop the old buffer. Capacity is picked by
//! [`growth::next_capacity`] and never shrinks.
//!
//! # Errors
//!
//! Allocating operations come in pairs: `try_*` returns
//! [`SequenceError`] and the plain form panics with the error's message.
//! [`Sequence::at`] reports [`SequenceError::OutOfRange`].
//!
//! # Logging
//!
//! Reallocations emit `tracing` events at `trace` level and allocation
//! failures at `debug` level. No subscriber is installed by this crate.
//!
//! # Safety
//!
//! The crate contains no `unsafe` code. [`Sequence::begin`] and friends hand
//! out raw pointers; dereferencing them is up to the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod buffer;
pub mod cmp;
pub mod error;
pub mod growth;
pub mod iter;
pub mod reserve;
pub mod sequence;

// Public re-exports for the primary API surface.
pub use buffer::OwnedBuffer;
pub use error::SequenceError;
pub use iter::IntoIter;
pub use reserve::{reserve, ReserveMarker};
pub use sequence::Sequence;
