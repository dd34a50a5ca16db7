//! # Dynamic Array
//!
//! A generic, index-addressable sequence container with contiguous storage and
//! amortized constant-time growth.
//!
//! [`DynamicArray<T>`] owns a single backing store of fixed capacity at any
//! instant plus a logical length. Elements occupy positions `[0, len)` with no
//! gaps; insertions and removals in the middle shift their neighbours by one
//! slot.
//!
//! ## Features
//!
//! - **Positional insertion** – [`insert_at`], [`insert_front`] & [`insert_back`]
//! - **Positional removal** – [`remove_at`], [`remove_front`] & [`remove_back`]
//! - **Lookup** – O(1) [`get`] and a reverse linear scan with [`last_index_of`]
//! - **Doubling growth** – capacity starts at [`INITIAL_CAPACITY`] (9) and doubles
//!   whenever an insertion finds the store full (9 → 18 → 36 → …)
//! - **No shrinking** – removals never release capacity; only [`clear`] resets it
//! - **`serde` support** – optional, behind the `serde` Cargo feature
//!
//! ## Error Policy
//!
//! Out-of-range indices and absent values are reported as
//! [`DynamicArrayError`] before anything is mutated. Removing from the front or
//! back of an empty array is **not** an error: those calls return `None`.
//! Removing by index from an empty array still fails with
//! [`DynamicArrayError::OutOfBounds`].
//!
//! ## Quick Example
//!
//! ```rust
//! use dynamic_array::{DynamicArray, DynamicArrayError};
//!
//! let mut array: DynamicArray<u32> = DynamicArray::new();
//! for value in 1..=10 {
//!     array.insert_back(value)?;
//! }
//! assert_eq!(array.capacity(), 18);
//!
//! assert_eq!(array.last_index_of(&5)?, Some(4));
//! assert_eq!(array.remove_at(4)?, 5);
//! assert_eq!(array.get(4)?, &6);
//!
//! assert_eq!(array.remove_front(), Some(1));
//! assert_eq!(array.len(), 8);
//! # Ok::<(), DynamicArrayError>(())
//! ```
//!
//! ## Logging
//!
//! Growth and clearing emit `tracing` events (`debug` and `trace` levels). The
//! crate never installs a subscriber.
//!
//! [`insert_at`]: DynamicArray::insert_at
//! [`insert_front`]: DynamicArray::insert_front
//! [`insert_back`]: DynamicArray::insert_back
//! [`remove_at`]: DynamicArray::remove_at
//! [`remove_front`]: DynamicArray::remove_front
//! [`remove_back`]: DynamicArray::remove_back
//! [`get`]: DynamicArray::get
//! [`last_index_of`]: DynamicArray::last_index_of
//! [`clear`]: DynamicArray::clear

pub mod error;
pub mod generic;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{DynamicArrayError, Result};
pub use generic::dynamic_array::DynamicArray;
pub use generic::growth::INITIAL_CAPACITY;
