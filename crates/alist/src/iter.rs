//! Borrowing iterators over live elements.
//!
//! Both iterators re-resolve each index against the list's current
//! window on every step instead of capturing a slice up front. The
//! shared borrow they hold rules out mutation while they are alive.
//! Asking the list for a new iterator restarts from index 0; cloning an
//! iterator continues from the same position.

use std::iter::FusedIterator;

use crate::list::ArrayList;
use crate::raw::RawList;

/// Iterator over `&T` in index order, produced by [`ArrayList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a ArrayList<T>,
    index: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a ArrayList<T>) -> Self {
        Self { list, index: 0 }
    }
}

// Manual impl: a derive would demand `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            index: self.index,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over `&[u8]` records in index order, produced by [`RawList::iter`].
#[derive(Clone, Debug)]
pub struct RawIter<'a> {
    list: &'a RawList,
    index: usize,
}

impl<'a> RawIter<'a> {
    pub(crate) fn new(list: &'a RawList) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for RawIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RawIter<'_> {}
impl FusedIterator for RawIter<'_> {}
