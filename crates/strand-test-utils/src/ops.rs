//! Random container operations for model-based tests.
//!
//! Positions are drawn unconstrained and folded into range when the
//! operation is applied, so one strategy serves sequences of any length.

use proptest::prelude::*;

/// A single mutating operation on a sequence of `i32`.
#[derive(Clone, Debug)]
pub enum Op {
    PushBack(i32),
    Insert { at: usize, value: i32 },
    Erase { at: usize },
    PopBack,
    Resize(usize),
    Reserve(usize),
    Clear,
}

impl Op {
    /// Insertion position for a sequence of `len` elements (`0..=len`).
    pub fn insert_position(at: usize, len: usize) -> usize {
        at % (len + 1)
    }

    /// Erase position for a sequence of `len` elements, or `None` when
    /// there is nothing to erase.
    pub fn erase_position(at: usize, len: usize) -> Option<usize> {
        (len > 0).then(|| at % len)
    }

    /// Apply to a `Vec` used as the reference model. Operations that would be
    /// precondition violations for the given length are skipped.
    pub fn apply_to_model(&self, model: &mut Vec<i32>) {
        match *self {
            Op::PushBack(value) => model.push(value),
            Op::Insert { at, value } => {
                let pos = Self::insert_position(at, model.len());
                model.insert(pos, value);
            }
            Op::Erase { at } => {
                if let Some(pos) = Self::erase_position(at, model.len()) {
                    model.remove(pos);
                }
            }
            Op::PopBack => {
                model.pop();
            }
            Op::Resize(new_len) => model.resize(new_len, 0),
            Op::Reserve(_) => {}
            Op::Clear => model.clear(),
        }
    }
}

/// Strategy for one operation, weighted towards growth.
pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(at, value)| Op::Insert { at, value }),
        2 => any::<usize>().prop_map(|at| Op::Erase { at }),
        1 => Just(Op::PopBack),
        1 => (0usize..48).prop_map(Op::Resize),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

/// Strategy for a script of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 0..max_len)
}
