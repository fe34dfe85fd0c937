//! Benchmark inputs for the strand sequence container.
//!
//! Provides deterministic workloads so runs are comparable across commits:
//!
//! - [`filled`]: a sequence of `len` pseudo-random values
//! - [`positions`]: pseudo-random insert/erase positions for a growing or
//!   shrinking sequence

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strand::Sequence;

/// Build a sequence of `len` values drawn from a seeded RNG.
pub fn filled(len: usize, seed: u64) -> Sequence<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u64()).collect()
}

/// `count` positions, the i-th valid for a sequence of `start_len + i`
/// elements when `growing`, or `start_len - i` elements otherwise.
///
/// Insertion positions range over `0..=len`; erase positions over `0..len`.
///
/// # Panics
///
/// Panics if a shrinking run asks for more positions than `start_len`.
pub fn positions(start_len: usize, count: usize, growing: bool, seed: u64) -> Vec<usize> {
    assert!(
        growing || count <= start_len,
        "cannot erase {count} positions from {start_len} elements"
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let bound = if growing {
                start_len + i + 1
            } else {
                start_len - i
            };
            (rng.next_u64() % bound as u64) as usize
        })
        .collect()
}
