//! Operation-sequence fixtures for property tests.
//!
//! [`ListOp`] names one mutating call on a list. [`arb_ops`] generates
//! sequences biased towards pushes so lists actually grow, with enough
//! front removal to exercise slack reclaim.

use proptest::prelude::*;

/// One mutating list operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOp {
    Push(u32),
    PopFront,
    PopBack,
    /// Remove at `hint % len`; a no-op on an empty list.
    Remove(usize),
    Clear,
    Shrink,
}

impl ListOp {
    /// Concrete index a `Remove` targets in a list of `len` elements.
    ///
    /// `None` for other operations and for empty lists.
    pub fn resolve_index(&self, len: usize) -> Option<usize> {
        match *self {
            ListOp::Remove(hint) if len > 0 => Some(hint % len),
            _ => None,
        }
    }
}

/// Strategy for a single operation.
pub fn arb_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        8 => any::<u32>().prop_map(ListOp::Push),
        3 => Just(ListOp::PopFront),
        1 => Just(ListOp::PopBack),
        2 => any::<usize>().prop_map(ListOp::Remove),
        1 => Just(ListOp::Clear),
        1 => Just(ListOp::Shrink),
    ]
}

/// Strategy for a sequence of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<ListOp>> {
    proptest::collection::vec(arb_op(), 0..max_len)
}
