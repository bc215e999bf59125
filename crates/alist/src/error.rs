//! List-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during list operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The allocator could not satisfy a growth request.
    AllocationFailed {
        /// Number of bytes requested for the new allocation.
        requested_bytes: usize,
    },
    /// The requested capacity does not fit in `usize` (elements or bytes).
    CapacityOverflow,
    /// An element pointer does not fall inside the live window.
    ItemNotInList,
    /// A record pushed into a [`RawList`](crate::RawList) has the wrong length.
    ItemSizeMismatch {
        /// The configured record size in bytes.
        expected: usize,
        /// The length of the slice that was supplied.
        actual: usize,
    },
    /// A [`ListConfig`](crate::ListConfig) with `item_size == 0`.
    ZeroItemSize,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::ItemNotInList => write!(f, "item not in list"),
            Self::ItemSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "item size mismatch: expected {expected} bytes, got {actual} bytes"
                )
            }
            Self::ZeroItemSize => write!(f, "item size must be non-zero"),
        }
    }
}

impl Error for ListError {}
