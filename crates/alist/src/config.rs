//! Raw list configuration parameters.

use crate::error::ListError;

/// Configuration for a type-erased [`RawList`](crate::RawList).
///
/// Fixes the record size and the number of slots reserved up front.
/// Validated at construction; the record size is immutable afterwards.
/// The growth policy is not configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Size of one record in bytes. Must be non-zero.
    pub item_size: usize,

    /// Number of record slots allocated at creation.
    ///
    /// Zero allocates nothing; the first push then grows to two slots.
    pub initial_capacity: usize,
}

impl ListConfig {
    /// Create a config for records of `item_size` bytes.
    pub fn new(item_size: usize, initial_capacity: usize) -> Self {
        Self {
            item_size,
            initial_capacity,
        }
    }

    /// Create a config whose records are the size of `T`.
    pub fn for_type<T>(initial_capacity: usize) -> Self {
        Self::new(std::mem::size_of::<T>(), initial_capacity)
    }

    /// Check the config, returning the error a list built from it would hit.
    pub fn validate(&self) -> Result<(), ListError> {
        if self.item_size == 0 {
            return Err(ListError::ZeroItemSize);
        }
        self.allocation_bytes()
            .map(|_| ())
            .ok_or(ListError::CapacityOverflow)
    }

    /// Size of the initial allocation in bytes, or `None` on overflow.
    pub fn allocation_bytes(&self) -> Option<usize> {
        self.item_size.checked_mul(self.initial_capacity)
    }
}
