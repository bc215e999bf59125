//! Type-erased list of fixed-size byte records.
//!
//! [`RawList`] is the untyped sibling of [`ArrayList`](crate::ArrayList):
//! the record size is chosen at runtime through a [`ListConfig`] and
//! every record is copied in and out as a byte slice. It uses the same
//! `Window` accounting, so growth, reclaim and the three removal
//! cases behave identically.

use std::fmt;
use std::mem;
use std::ops::Range;

use tracing::trace;

use crate::config::ListConfig;
use crate::error::ListError;
use crate::iter::RawIter;
use crate::window::{PushPlan, Removal, Window};

/// Growable contiguous list of `item_size`-byte records.
///
/// Records are copied by value on [`push`](Self::push); later changes to
/// the caller's buffer do not reach the stored copy. Bytes outside the
/// live window have no meaning and are not zeroed on removal.
#[derive(Clone)]
pub struct RawList {
    /// Exact-length allocation of `window.physical() * item_size` bytes.
    bytes: Box<[u8]>,
    item_size: usize,
    window: Window,
}

impl RawList {
    /// Create an empty list with `config.initial_capacity` record slots.
    ///
    /// Returns an error if `config` fails [`ListConfig::validate`].
    /// Aborts if the allocator cannot satisfy the request.
    pub fn new(config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;
        let bytes = config
            .allocation_bytes()
            .ok_or(ListError::CapacityOverflow)?;
        Ok(Self {
            bytes: vec![0; bytes].into_boxed_slice(),
            item_size: config.item_size,
            window: Window::new(config.initial_capacity),
        })
    }

    /// Size of one record in bytes.
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the list has no live records.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Record slots available from the current front, excluding slack.
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Dead record slots in front of the first record.
    pub fn slack(&self) -> usize {
        self.window.slack()
    }

    /// Total record slots in the backing allocation.
    pub fn physical_capacity(&self) -> usize {
        self.window.physical()
    }

    /// Append a copy of `item`.
    ///
    /// `item` must be exactly `item_size` bytes long; otherwise
    /// [`ListError::ItemSizeMismatch`] is returned and nothing changes.
    /// Aborts if the allocator cannot satisfy a growth.
    pub fn push(&mut self, item: &[u8]) -> Result<(), ListError> {
        if item.len() != self.item_size {
            return Err(ListError::ItemSizeMismatch {
                expected: self.item_size,
                actual: item.len(),
            });
        }
        match self.window.plan_push()? {
            PushPlan::Fits => {}
            PushPlan::Reclaim => self.reclaim(),
            PushPlan::Grow { new_physical } => self.grow(new_physical)?,
        }
        let slot = self.window.push_back();
        let range = self.byte_range(slot);
        self.bytes[range].copy_from_slice(item);
        Ok(())
    }

    /// Record at `idx`, or `None` if `idx >= len()`.
    pub fn get(&self, idx: usize) -> Option<&[u8]> {
        let slot = self.window.slot(idx)?;
        Some(&self.bytes[self.byte_range(slot)])
    }

    /// Mutable record at `idx`, or `None` if `idx >= len()`.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut [u8]> {
        let slot = self.window.slot(idx)?;
        let range = self.byte_range(slot);
        Some(&mut self.bytes[range])
    }

    /// First record, if any.
    pub fn front(&self) -> Option<&[u8]> {
        self.get(0)
    }

    /// Remove the record at `idx`. Returns `false` if `idx >= len()`.
    ///
    /// First and last removal are O(1) and move nothing; interior
    /// removal shifts every later record down one slot.
    pub fn remove(&mut self, idx: usize) -> bool {
        let Some(removal) = self.window.classify(idx) else {
            return false;
        };
        if removal == Removal::Interior {
            let at = (self.window.start() + idx) * self.item_size;
            let end = self.window.live().end * self.item_size;
            self.bytes.copy_within(at + self.item_size..end, at);
        }
        self.window.remove(removal);
        true
    }

    /// Remove the first record. Returns `false` if the list is empty.
    pub fn pop_front(&mut self) -> bool {
        self.remove(0)
    }

    /// Index of the record starting at (or containing) `item`, or `None`
    /// if it lies outside the live window.
    ///
    /// `item` must come from this list's accessors since its last
    /// mutation; misaligned pointers are not detected.
    pub fn index_of(&self, item: *const u8) -> Option<usize> {
        let offset = item.addr().checked_sub(self.bytes.as_ptr().addr())?;
        self.window.index_of_slot(offset / self.item_size)
    }

    /// Remove the record `item` points at, returning the index it held.
    ///
    /// A pointer outside the live window is [`ListError::ItemNotInList`].
    pub fn remove_item(&mut self, item: *const u8) -> Result<usize, ListError> {
        let idx = self.index_of(item).ok_or(ListError::ItemNotInList)?;
        self.remove(idx);
        Ok(idx)
    }

    /// Forget every record and reclaim all slack, keeping the allocation.
    pub fn clear(&mut self) {
        let slack = self.window.clear();
        trace!(slack, capacity = self.window.capacity(), "cleared raw list");
    }

    /// Reallocate so that `capacity() == len()` and no slack remains.
    ///
    /// An empty list releases its allocation entirely.
    pub fn shrink(&mut self) {
        if self.window.slack() > 0 {
            self.reclaim();
        }
        let len = self.len();
        let mut bytes = mem::take(&mut self.bytes).into_vec();
        bytes.truncate(len * self.item_size);
        self.bytes = bytes.into_boxed_slice();
        self.window.resize(len);
        trace!(len, physical = len, "shrunk raw list to fit");
    }

    /// Free the allocation, leaving an empty list that owns nothing.
    /// Releasing twice is a no-op.
    ///
    /// Unlike every other field, `item_size` is not reset: a released
    /// list is still bound to its record size and accepts pushes of that
    /// size straight away, growing from zero capacity.
    pub fn release(&mut self) {
        self.bytes = Box::default();
        self.window = Window::default();
    }

    /// Iterate over the live records in index order.
    pub fn iter(&self) -> RawIter<'_> {
        RawIter::new(self)
    }

    /// First record satisfying `predicate`, scanning from index 0.
    pub fn find<P>(&self, mut predicate: P) -> Option<&[u8]>
    where
        P: FnMut(&[u8]) -> bool,
    {
        self.iter().find(|item| predicate(*item))
    }

    fn byte_range(&self, slot: usize) -> Range<usize> {
        let start = slot * self.item_size;
        start..start + self.item_size
    }

    /// Move the live records to offset 0 and fold slack into capacity.
    fn reclaim(&mut self) {
        let live = self.window.live();
        self.bytes
            .copy_within(live.start * self.item_size..live.end * self.item_size, 0);
        let slack = self.window.reclaim();
        trace!(
            slack,
            len = self.window.len(),
            capacity = self.window.capacity(),
            "reclaimed raw list front slack"
        );
    }

    fn grow(&mut self, new_physical: usize) -> Result<(), ListError> {
        let new_len = new_physical
            .checked_mul(self.item_size)
            .ok_or(ListError::CapacityOverflow)?;
        let mut bytes = mem::take(&mut self.bytes).into_vec();
        bytes.reserve_exact(new_len - bytes.len());
        bytes.resize(new_len, 0);
        self.bytes = bytes.into_boxed_slice();
        self.window.resize(new_physical);
        trace!(
            len = self.window.len(),
            physical = new_physical,
            "grew raw list allocation"
        );
        Ok(())
    }
}

impl fmt::Debug for RawList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawList")
            .field("item_size", &self.item_size)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("slack", &self.slack())
            .finish()
    }
}

impl<'a> IntoIterator for &'a RawList {
    type Item = &'a [u8];
    type IntoIter = RawIter<'a>;

    fn into_iter(self) -> RawIter<'a> {
        self.iter()
    }
}
