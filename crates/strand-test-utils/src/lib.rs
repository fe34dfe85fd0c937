//! Test utilities and instrumented element types for strand development.
//!
//! Provides element types that make ownership bugs observable
//! ([`Tracked`], [`Fragile`]) and proptest strategies over container
//! operations ([`ops`]) for model-based testing against `Vec`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod elements;
pub mod ops;

pub use elements::{Fragile, Tracked};
pub use ops::{arb_op, arb_ops, Op};
