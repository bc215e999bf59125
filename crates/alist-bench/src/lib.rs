//! Benchmark workloads for the alist containers.
//!
//! Provides pre-built list states and access patterns shared by the
//! criterion benches:
//!
//! - [`filled_list`] / [`filled_raw_list`]: lists holding `0..len`
//! - [`queue_churn`]: alternating push and pop-front, the pattern that
//!   exercises slack reclaim instead of reallocation

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use alist::{ArrayList, ListConfig, ListError, RawList};

/// Build a typed list holding `0..len`, grown through ordinary pushes.
pub fn filled_list(len: u32) -> ArrayList<u32> {
    (0..len).collect()
}

/// Build a raw list of 4-byte records holding `0..len`.
pub fn filled_raw_list(len: u32) -> Result<RawList, ListError> {
    let mut list = RawList::new(ListConfig::for_type::<u32>(0))?;
    for v in 0..len {
        list.push(&v.to_ne_bytes())?;
    }
    Ok(list)
}

/// Run `rounds` of push-then-pop-front on `list`, returning the sum of
/// popped values so the work cannot be optimised away.
pub fn queue_churn(list: &mut ArrayList<u32>, rounds: u32) -> u64 {
    let mut sum = 0u64;
    for v in 0..rounds {
        list.push(v);
        if let Some(popped) = list.pop_front() {
            sum += u64::from(popped);
        }
    }
    sum
}
