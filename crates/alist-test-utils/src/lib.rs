//! Test utilities and reference models for alist development.
//!
//! Provides a [`ModelList`] that mirrors list semantics on top of
//! `VecDeque`, operation-sequence fixtures in [`fixtures`], and a
//! one-shot tracing subscriber for tests that want to see growth and
//! reclaim events.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use tracing_subscriber::EnvFilter;

pub use fixtures::{arb_op, arb_ops, ListOp};

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test: only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Reference model for list contents.
///
/// Tracks values only; capacity behaviour is checked against the real
/// containers directly. Index-bearing operations resolve their index the
/// same way the harnesses do (see [`ListOp::resolve_index`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelList {
    items: VecDeque<u32>,
}

impl ModelList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<u32> {
        self.items.get(idx).copied()
    }

    /// Values in index order.
    pub fn values(&self) -> Vec<u32> {
        self.items.iter().copied().collect()
    }

    /// Apply `op`, returning the value it removed, if any.
    pub fn apply(&mut self, op: ListOp) -> Option<u32> {
        match op {
            ListOp::Push(value) => {
                self.items.push_back(value);
                None
            }
            ListOp::PopFront => self.items.pop_front(),
            ListOp::PopBack => self.items.pop_back(),
            ListOp::Remove(_) => op
                .resolve_index(self.len())
                .and_then(|idx| self.items.remove(idx)),
            ListOp::Clear => {
                self.items.clear();
                None
            }
            ListOp::Shrink => None,
        }
    }
}
