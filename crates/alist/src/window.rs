//! Logical-window bookkeeping over a single physical allocation.
//!
//! A [`Window`] tracks which slots of an allocation hold live elements.
//! It owns no storage: [`ArrayList`](crate::ArrayList) and
//! [`RawList`](crate::RawList) consult it to decide where a push lands,
//! whether growth means reclaiming slack or reallocating, and which of
//! the three removal strategies applies to an index.

use std::ops::Range;

use crate::error::ListError;

/// What a push must do before it can write its element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushPlan {
    /// At least two free slots remain; write in place.
    Fits,
    /// Move the live elements back to slot 0, turning the dead slots in
    /// front of the window into capacity. No allocation.
    Reclaim,
    /// Reallocate to `new_physical` slots.
    Grow {
        /// Slot count of the replacement allocation.
        new_physical: usize,
    },
}

/// Which removal strategy applies to an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// Last element: drop it from the length. O(1), nothing moves.
    Back,
    /// First element: slide the window start forward. O(1), nothing moves.
    Front,
    /// Anything else: shift the tail left by one slot. O(n).
    Interior,
}

/// Live range of a list inside its physical allocation.
///
/// All quantities are element counts. `capacity` is derived, never
/// stored, so `slack() + capacity() == physical()` holds by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    /// Physical slot of logical index 0.
    start: usize,
    /// Number of live elements.
    len: usize,
    /// Total slots in the allocation.
    physical: usize,
}

impl Window {
    /// A window over a fresh allocation of `physical` slots.
    pub const fn new(physical: usize) -> Self {
        Self {
            start: 0,
            len: 0,
            physical,
        }
    }

    /// A window over `physical` slots whose first `len` slots are live.
    pub fn with_len(physical: usize, len: usize) -> Self {
        debug_assert!(len <= physical, "live length exceeds allocation");
        Self {
            start: 0,
            len,
            physical,
        }
    }

    /// Physical slot of the first live element.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slots in the allocation, slack included.
    pub fn physical(&self) -> usize {
        self.physical
    }

    /// Slots addressable from the window start, live or free.
    pub fn capacity(&self) -> usize {
        self.physical - self.start
    }

    /// Dead slots in front of the window left behind by front removal.
    pub fn slack(&self) -> usize {
        self.start
    }

    /// Physical slots currently holding live elements.
    pub fn live(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Physical slot of logical index `idx`, if it is live.
    pub fn slot(&self, idx: usize) -> Option<usize> {
        (idx < self.len).then(|| self.start + idx)
    }

    /// Logical index of physical slot `slot`, if it is live.
    pub fn index_of_slot(&self, slot: usize) -> Option<usize> {
        self.live().contains(&slot).then(|| slot - self.start)
    }

    /// Decide how the next push makes room.
    ///
    /// Growth triggers while one free slot still remains, so a push
    /// that reallocates always leaves `capacity > len`. Slack is
    /// reclaimed in preference to reallocating, even when the reclaimed
    /// window then ends up exactly full.
    pub fn plan_push(&self) -> Result<PushPlan, ListError> {
        if self.capacity() - self.len > 1 {
            return Ok(PushPlan::Fits);
        }
        if self.start != 0 {
            return Ok(PushPlan::Reclaim);
        }
        let new_physical = self
            .capacity()
            .checked_add(1)
            .and_then(|c| c.checked_mul(2))
            .ok_or(ListError::CapacityOverflow)?;
        Ok(PushPlan::Grow { new_physical })
    }

    /// Claim the slot after the last live element, returning its physical index.
    pub fn push_back(&mut self) -> usize {
        debug_assert!(self.len < self.capacity(), "push into a full window");
        let slot = self.start + self.len;
        self.len += 1;
        slot
    }

    /// Classify the removal of logical index `idx`, or `None` if it is not live.
    pub fn classify(&self, idx: usize) -> Option<Removal> {
        if idx >= self.len {
            None
        } else if idx == self.len - 1 {
            Some(Removal::Back)
        } else if idx == 0 {
            Some(Removal::Front)
        } else {
            Some(Removal::Interior)
        }
    }

    /// Account for a completed removal.
    ///
    /// `Front` slides the start forward, trading one slot of capacity for
    /// one slot of slack. `Back` and `Interior` only shorten the window.
    pub fn remove(&mut self, removal: Removal) {
        debug_assert!(self.len > 0, "remove from an empty window");
        if removal == Removal::Front {
            self.start += 1;
        }
        self.len -= 1;
    }

    /// Fold all slack into capacity. The caller must already have moved
    /// the live elements to slot 0. Returns the number of slots reclaimed.
    pub fn reclaim(&mut self) -> usize {
        std::mem::take(&mut self.start)
    }

    /// Drop every live element and reclaim all slack. The allocation is kept.
    pub fn clear(&mut self) -> usize {
        self.len = 0;
        self.reclaim()
    }

    /// Record a reallocation to `physical` slots. The window must have
    /// been reclaimed and the live elements must fit.
    pub fn resize(&mut self, physical: usize) {
        debug_assert_eq!(self.start, 0, "resize with outstanding slack");
        debug_assert!(self.len <= physical, "resize below live length");
        self.physical = physical;
    }
}
