//! Typed array list with a sliding logical window.
//!
//! [`ArrayList<T>`] stores its elements in one exact-length boxed slice
//! of `Option<T>` slots and tracks the live range with a `Window`.
//! Front removal vacates a slot and slides the window instead of
//! shifting; the dead slots are folded back into capacity the next time
//! a push runs short of room.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;

use tracing::trace;

use crate::error::ListError;
use crate::iter::Iter;
use crate::window::{PushPlan, Removal, Window};

/// Growable contiguous list with O(1) removal at both ends.
///
/// - [`push`](Self::push): amortized O(1). Reclaims front slack before
///   it reallocates, and grows to `(capacity + 1) * 2` slots otherwise.
/// - [`pop_front`](Self::pop_front) / [`pop_back`](Self::pop_back): O(1),
///   surviving elements keep their addresses.
/// - [`remove`](Self::remove) of an interior index: O(n), shifts the tail.
/// - [`get`](Self::get): O(1).
///
/// References returned by accessors are invalidated by any mutating
/// call; the borrow checker enforces this. Raw pointers obtained from
/// them are only meaningful until the next mutation.
pub struct ArrayList<T> {
    /// Exact-length allocation. `Some` exactly on the window's live slots.
    slots: Box<[Option<T>]>,
    window: Window,
}

impl<T> ArrayList<T> {
    /// Create an empty list without allocating.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the allocation size overflows `isize::MAX` bytes.
    /// Aborts if the allocator cannot satisfy the request.
    pub fn with_capacity(capacity: usize) -> Self {
        let slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(capacity).collect();
        Self {
            slots: slots.into_boxed_slice(),
            window: Window::new(capacity),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the list has no live elements.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Slots available from the current front before growth or reclaim.
    ///
    /// Excludes slack left behind by front removal.
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Dead slots in front of the first element.
    pub fn slack(&self) -> usize {
        self.window.slack()
    }

    /// Total slots in the backing allocation, `slack() + capacity()`.
    pub fn physical_capacity(&self) -> usize {
        self.window.physical()
    }

    /// Append `value` at index `len()`.
    ///
    /// Growth fires while one free slot still remains, so a push that
    /// grows always leaves `capacity() > len()`.
    ///
    /// # Panics
    ///
    /// Panics if the grown slot count overflows `usize`. Aborts if the
    /// allocator cannot satisfy the growth.
    pub fn push(&mut self, value: T) {
        match self.window.plan_push() {
            Ok(PushPlan::Fits) => {}
            Ok(PushPlan::Reclaim) => self.reclaim(),
            Ok(PushPlan::Grow { new_physical }) => {
                let mut slots = mem::take(&mut self.slots).into_vec();
                slots.reserve_exact(new_physical - slots.len());
                self.install_grown(slots, new_physical);
            }
            Err(_) => panic!("capacity overflow"),
        }
        self.write_back(value);
    }

    /// Append `value`, reporting allocation failure instead of aborting.
    ///
    /// On error the list is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), ListError> {
        match self.window.plan_push()? {
            PushPlan::Fits => {}
            PushPlan::Reclaim => self.reclaim(),
            PushPlan::Grow { new_physical } => self.try_grow(new_physical)?,
        }
        self.write_back(value);
        Ok(())
    }

    /// Element at `idx`, or `None` if `idx >= len()`.
    pub fn get(&self, idx: usize) -> Option<&T> {
        let slot = self.window.slot(idx)?;
        self.slots[slot].as_ref()
    }

    /// Mutable element at `idx`, or `None` if `idx >= len()`.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        let slot = self.window.slot(idx)?;
        self.slots[slot].as_mut()
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Remove and return the element at `idx`, or `None` if `idx >= len()`.
    ///
    /// Removing the first or last element is O(1) and moves nothing.
    /// Removing an interior element shifts every later element down one
    /// index; pointers to them go stale.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        let removal = self.window.classify(idx)?;
        let slot = self.window.start() + idx;
        let value = self.slots[slot].take();
        if removal == Removal::Interior {
            let end = self.window.live().end;
            self.slots[slot..end].rotate_left(1);
        }
        self.window.remove(removal);
        value
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0)
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove(self.len().checked_sub(1)?)
    }

    /// Index of the element `item` points at, or `None` if it lies
    /// outside the live window.
    ///
    /// `item` must have been obtained from this list's accessors since
    /// its last mutation. A pointer inside the window that does not sit
    /// on an element boundary maps to the element it falls within.
    pub fn index_of(&self, item: *const T) -> Option<usize> {
        let first = ptr::from_ref(self.front()?).addr();
        let stride = mem::size_of::<Option<T>>().max(1);
        let idx = item.addr().checked_sub(first)? / stride;
        (idx < self.len()).then_some(idx)
    }

    /// Remove the element `item` points at and return it.
    ///
    /// Same contract as [`index_of`](Self::index_of). A pointer outside
    /// the live window is [`ListError::ItemNotInList`] and removes nothing.
    pub fn remove_item(&mut self, item: *const T) -> Result<T, ListError> {
        let idx = self.index_of(item).ok_or(ListError::ItemNotInList)?;
        self.remove(idx).ok_or(ListError::ItemNotInList)
    }

    /// Drop every element and reclaim all slack, keeping the allocation.
    pub fn clear(&mut self) {
        let live = self.window.live();
        for slot in &mut self.slots[live] {
            *slot = None;
        }
        let slack = self.window.clear();
        trace!(slack, capacity = self.window.capacity(), "cleared list");
    }

    /// Reallocate so that `capacity() == len()` and no slack remains.
    ///
    /// An empty list releases its allocation entirely.
    pub fn shrink(&mut self) {
        if self.window.slack() > 0 {
            self.reclaim();
        }
        let len = self.len();
        let mut slots = mem::take(&mut self.slots).into_vec();
        slots.truncate(len);
        self.slots = slots.into_boxed_slice();
        self.window.resize(len);
        trace!(len, physical = len, "shrunk list to fit");
    }

    /// Drop every element and free the allocation, leaving an empty list
    /// that owns nothing. Releasing twice is a no-op.
    pub fn release(&mut self) {
        self.slots = Box::default();
        self.window = Window::default();
    }

    /// Iterate over the live elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// First element satisfying `predicate`, scanning from index 0.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(*item))
    }

    fn write_back(&mut self, value: T) {
        let slot = self.window.push_back();
        self.slots[slot] = Some(value);
    }

    /// Move the live elements to slot 0 and fold slack into capacity.
    fn reclaim(&mut self) {
        let live = self.window.live();
        for (dst, src) in live.enumerate() {
            let moved = self.slots[src].take();
            self.slots[dst] = moved;
        }
        let slack = self.window.reclaim();
        trace!(
            slack,
            len = self.window.len(),
            capacity = self.window.capacity(),
            "reclaimed front slack"
        );
    }

    /// Reallocate to `new_physical` slots. On error nothing has moved and
    /// the old allocation is back in place.
    fn try_grow(&mut self, new_physical: usize) -> Result<(), ListError> {
        let requested_bytes = new_physical
            .checked_mul(mem::size_of::<Option<T>>())
            .ok_or(ListError::CapacityOverflow)?;
        let mut slots = mem::take(&mut self.slots).into_vec();
        if slots.try_reserve_exact(new_physical - slots.len()).is_err() {
            self.slots = slots.into_boxed_slice();
            return Err(ListError::AllocationFailed { requested_bytes });
        }
        self.install_grown(slots, new_physical);
        Ok(())
    }

    /// Finish a growth: `slots` already has room for `new_physical` entries.
    fn install_grown(&mut self, mut slots: Vec<Option<T>>, new_physical: usize) {
        slots.resize_with(new_physical, || None);
        self.slots = slots.into_boxed_slice();
        self.window.resize(new_physical);
        trace!(
            len = self.window.len(),
            physical = new_physical,
            "grew list allocation"
        );
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Clones the live elements into a fresh allocation of the same
/// window capacity. Slack is not carried over.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let physical = self.capacity();
        let mut slots = Vec::with_capacity(physical);
        slots.extend(self.iter().cloned().map(Some));
        slots.resize_with(physical, || None);
        Self {
            slots: slots.into_boxed_slice(),
            window: Window::with_len(physical, self.len()),
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        let len = self.len();
        self.get(idx)
            .unwrap_or_else(|| panic!("index {idx} out of range for list of length {len}"))
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        let len = self.len();
        self.get_mut(idx)
            .unwrap_or_else(|| panic!("index {idx} out of range for list of length {len}"))
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr<T>(list: &ArrayList<T>, idx: usize) -> usize {
        ptr::from_ref(list.get(idx).unwrap()).addr()
    }

    #[test]
    fn new_list_owns_nothing() {
        let list: ArrayList<u32> = ArrayList::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 0);
        assert_eq!(list.physical_capacity(), 0);
    }

    #[test]
    fn with_capacity_reserves_exactly() {
        let list: ArrayList<u32> = ArrayList::with_capacity(5);
        assert_eq!(list.capacity(), 5);
        assert_eq!(list.slack(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn push_copies_value_in() {
        let mut list = ArrayList::with_capacity(2);
        let mut source = [1u8, 2, 3];
        list.push(source);
        source[0] = 99;
        assert_eq!(list.get(0), Some(&[1u8, 2, 3]));
    }

    #[test]
    fn first_push_into_empty_list_grows_to_two() {
        let mut list = ArrayList::new();
        list.push(1u32);
        assert_eq!(list.capacity(), 2);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn growth_leaves_headroom() {
        let mut list = ArrayList::with_capacity(5);
        for i in 0..4u32 {
            list.push(i);
        }
        assert_eq!(list.capacity(), 5);
        list.push(4);
        assert_eq!(list.capacity(), 12);
        assert!(list.capacity() > list.len());
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut list = ArrayList::with_capacity(5);
        assert_eq!(list.get(0), None);
        list.push(7u32);
        assert_eq!(list.get(1), None);
        assert_eq!(list.get(usize::MAX), None);
        assert_eq!(list.get(0usize.wrapping_sub(1)), None);
    }

    #[test]
    fn pop_front_keeps_survivor_addresses() {
        let mut list: ArrayList<u64> = (0..10).collect();
        let before: Vec<usize> = (1..10).map(|i| addr(&list, i)).collect();
        assert_eq!(list.pop_front(), Some(0));
        let after: Vec<usize> = (0..9).map(|i| addr(&list, i)).collect();
        assert_eq!(before, after);
        assert_eq!(list.slack(), 1);
    }

    #[test]
    fn pop_back_keeps_survivor_addresses() {
        let mut list: ArrayList<u64> = (0..10).collect();
        let before: Vec<usize> = (0..9).map(|i| addr(&list, i)).collect();
        let capacity = list.capacity();
        assert_eq!(list.pop_back(), Some(9));
        let after: Vec<usize> = (0..9).map(|i| addr(&list, i)).collect();
        assert_eq!(before, after);
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn front_removal_trades_capacity_for_slack() {
        let mut list: ArrayList<u32> = ArrayList::with_capacity(8);
        list.extend(0..4);
        list.remove(0);
        assert_eq!(list.capacity(), 7);
        assert_eq!(list.slack(), 1);
        assert_eq!(list.physical_capacity(), 8);
    }

    #[test]
    fn interior_removal_shifts_tail() {
        let mut list: ArrayList<u32> = (0..6).collect();
        assert_eq!(list.remove(2), Some(2));
        let seen: Vec<u32> = list.iter().copied().collect();
        assert_eq!(seen, vec![0, 1, 3, 4, 5]);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut list: ArrayList<u32> = (0..3).collect();
        assert_eq!(list.remove(3), None);
        assert_eq!(list.len(), 3);
        let mut empty: ArrayList<u32> = ArrayList::new();
        assert_eq!(empty.pop_front(), None);
        assert_eq!(empty.pop_back(), None);
    }

    #[test]
    fn remove_item_by_pointer() {
        let mut list: ArrayList<u32> = [1, 2, 3].into_iter().collect();
        let two = ptr::from_ref(list.get(1).unwrap());
        assert_eq!(list.remove_item(two), Ok(2));
        let seen: Vec<u32> = list.iter().copied().collect();
        assert_eq!(seen, vec![1, 3]);
    }

    #[test]
    fn remove_item_outside_window_is_error() {
        let mut list: ArrayList<u32> = [1, 2, 3].into_iter().collect();
        let stranger = 5u32;
        assert_eq!(
            list.remove_item(ptr::from_ref(&stranger)),
            Err(ListError::ItemNotInList)
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_item_of_popped_front_is_error() {
        let mut list: ArrayList<u32> = (0..5).collect();
        let first = ptr::from_ref(list.get(0).unwrap());
        list.pop_front();
        assert_eq!(list.index_of(first), None);
        assert_eq!(list.remove_item(first), Err(ListError::ItemNotInList));
    }

    #[test]
    fn index_of_past_the_end_is_none() {
        let mut list: ArrayList<u32> = ArrayList::with_capacity(8);
        list.extend([1, 2, 3]);
        let last = ptr::from_ref(list.get(2).unwrap());
        list.pop_back();
        assert_eq!(list.index_of(last), None);
    }

    #[test]
    fn clear_reclaims_slack_and_keeps_allocation() {
        let mut list: ArrayList<u32> = ArrayList::with_capacity(10);
        list.extend(0..6);
        list.pop_front();
        list.pop_front();
        assert_eq!(list.capacity(), 8);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 10);
        assert_eq!(list.slack(), 0);
    }

    #[test]
    fn shrink_fits_length_exactly() {
        let mut list: ArrayList<u32> = (0..10).collect();
        list.pop_front();
        list.pop_front();
        list.shrink();
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.physical_capacity(), 8);
        let seen: Vec<u32> = list.iter().copied().collect();
        assert_eq!(seen, (2..10).collect::<Vec<_>>());
    }

    #[test]
    fn shrink_empty_releases_allocation() {
        let mut list: ArrayList<u32> = (0..3).collect();
        list.clear();
        list.shrink();
        assert_eq!(list.capacity(), 0);
        assert_eq!(list.physical_capacity(), 0);
        list.push(4);
        assert_eq!(list.get(0), Some(&4));
    }

    #[test]
    fn release_twice_is_noop() {
        let mut list: ArrayList<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        list.release();
        assert_eq!(list.len(), 0);
        assert_eq!(list.physical_capacity(), 0);
        list.release();
        assert_eq!(list.physical_capacity(), 0);
    }

    #[test]
    fn find_returns_first_match() {
        let list: ArrayList<u32> = [5, 8, 12, 8].into_iter().collect();
        let hit = list.find(|&v| v % 4 == 0).unwrap();
        assert_eq!(*hit, 8);
        assert_eq!(list.index_of(ptr::from_ref(hit)), Some(1));
        assert_eq!(list.find(|&v| v > 100), None);
    }

    #[test]
    fn find_on_empty_is_none() {
        let list: ArrayList<u32> = ArrayList::new();
        assert_eq!(list.find(|_| true), None);
    }

    #[test]
    fn try_push_matches_push() {
        let mut a = ArrayList::with_capacity(3);
        let mut b = ArrayList::with_capacity(3);
        for i in 0..20u32 {
            a.push(i);
            b.try_push(i).unwrap();
            assert_eq!(a.capacity(), b.capacity());
        }
        assert_eq!(a, b);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn failed_growth_leaves_list_unchanged() {
        let mut list: ArrayList<u64> = (0..3).collect();
        list.pop_back();
        let capacity = list.capacity();
        let first = addr(&list, 0);

        // Byte count overflows usize.
        assert_eq!(list.try_grow(usize::MAX / 2), Err(ListError::CapacityOverflow));
        // Byte count fits but no allocator can hand out 4 EiB.
        let huge = 1usize << 58;
        assert_eq!(
            list.try_grow(huge),
            Err(ListError::AllocationFailed {
                requested_bytes: huge * mem::size_of::<Option<u64>>(),
            })
        );

        assert_eq!(list.len(), 2);
        assert_eq!(list.capacity(), capacity);
        assert_eq!(list.physical_capacity(), capacity);
        assert_eq!(addr(&list, 0), first);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1]);

        list.try_push(2).unwrap();
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn owned_values_are_dropped_once() {
        use std::rc::Rc;

        let marker = Rc::new(());
        let mut list = ArrayList::with_capacity(2);
        for _ in 0..6 {
            list.push(Rc::clone(&marker));
        }
        list.pop_front();
        list.remove(2);
        list.push(Rc::clone(&marker));
        assert_eq!(Rc::strong_count(&marker), 1 + list.len());
        list.shrink();
        assert_eq!(Rc::strong_count(&marker), 1 + list.len());
        list.clear();
        assert_eq!(Rc::strong_count(&marker), 1);
        list.push(Rc::clone(&marker));
        drop(list);
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn clone_folds_slack() {
        let mut list: ArrayList<u32> = ArrayList::with_capacity(8);
        list.extend(0..5);
        list.pop_front();
        let copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.slack(), 0);
        assert_eq!(copy.capacity(), list.capacity());
    }

    #[test]
    fn index_operator_reads_and_writes() {
        let mut list: ArrayList<u32> = (0..3).collect();
        list[1] = 10;
        assert_eq!(list[1], 10);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for list of length 3")]
    fn index_operator_panics_out_of_range() {
        let list: ArrayList<u32> = (0..3).collect();
        let _ = list[3];
    }

    #[test]
    fn zero_sized_elements() {
        let mut list = ArrayList::with_capacity(1);
        for _ in 0..5 {
            list.push(());
        }
        assert_eq!(list.len(), 5);
        let third = ptr::from_ref(list.get(2).unwrap());
        assert_eq!(list.index_of(third), Some(2));
        list.pop_front();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut list: ArrayList<u32> = (0..4).collect();
        list.pop_front();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }
}
