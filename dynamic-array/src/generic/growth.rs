//! Capacity policy for the growable backing store.
//!
//! The store starts at [`INITIAL_CAPACITY`] slots and only ever grows by
//! doubling, so every reachable capacity is `INITIAL_CAPACITY * 2^k`.

use crate::error::{DynamicArrayError, Result};

/// Number of slots allocated by a fresh or cleared array.
pub const INITIAL_CAPACITY: usize = 9;

/// Returns the capacity that follows `current` under the doubling rule.
///
/// # Errors
///
/// Returns [`DynamicArrayError::CapacityOverflow`] if the doubled capacity does
/// not fit in a `usize`.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::generic::growth::{next_capacity, INITIAL_CAPACITY};
///
/// assert_eq!(next_capacity(INITIAL_CAPACITY).unwrap(), 18);
/// assert!(next_capacity(usize::MAX).is_err());
/// ```
pub fn next_capacity(current: usize) -> Result<usize> {
    current
        .checked_mul(2)
        .ok_or(DynamicArrayError::CapacityOverflow { capacity: current })
}

/// Smallest reachable capacity that can hold `len` elements.
///
/// This is the capacity an empty array ends up with after `len` back
/// insertions.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::generic::growth::capacity_for;
///
/// assert_eq!(capacity_for(0), Ok(9));
/// assert_eq!(capacity_for(9), Ok(9));
/// assert_eq!(capacity_for(10), Ok(18));
/// assert_eq!(capacity_for(37), Ok(72));
/// ```
pub fn capacity_for(len: usize) -> Result<usize> {
    let mut capacity = INITIAL_CAPACITY;
    while capacity < len {
        capacity = next_capacity(capacity)?;
    }
    Ok(capacity)
}
