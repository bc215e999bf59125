//! Contiguous array list with O(1) removal at both ends.
//!
//! Provides a growable sequence backed by a single exact-length
//! allocation. Appends are amortized O(1), removal at either end is O(1)
//! and never moves the surviving elements, and interior removal shifts
//! the tail down by one slot.
//!
//! # Architecture
//!
//! Removing the first element does not shift anything: the logical
//! window simply slides forward, leaving dead "slack" slots behind it.
//! Slack is folded back into usable capacity lazily, the next time a
//! push would otherwise have to grow the allocation.
//!
//! ```text
//! physical allocation (exact length)
//! ┌───────────┬──────────────────────┬───────────────┐
//! │   slack   │    live elements     │   free room   │
//! └───────────┴──────────────────────┴───────────────┘
//! 0         start             start + len        physical
//!             └────────────── capacity ──────────────┘
//! ```
//!
//! The bookkeeping lives in a crate-private `Window`; two containers
//! share it:
//!
//! - [`ArrayList<T>`]: typed, owning container.
//! - [`RawList`]: type-erased container of fixed-size byte records,
//!   configured through [`ListConfig`].
//!
//! # Safety
//!
//! No `unsafe`. Slots are `Option<T>` (typed) or plain bytes (raw), so
//! moving the window and shifting elements are ordinary safe moves.
//! Element pointers handed back to [`ArrayList::remove_item`] are only
//! compared by address, never dereferenced.
//!
//! # Concurrency
//!
//! Neither container synchronizes internally. Share one across threads
//! only behind an external lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod iter;
pub mod list;
pub mod raw;
pub(crate) mod window;

// Public re-exports for the primary API surface.
pub use config::ListConfig;
pub use error::ListError;
pub use iter::{Iter, RawIter};
pub use list::ArrayList;
pub use raw::RawList;
