//! Growable, index-addressable array with shift-based insertion and removal.
//!
//! This module provides [`DynamicArray`], a contiguous list whose backing store
//! starts at [`INITIAL_CAPACITY`] slots and doubles whenever an insertion finds
//! it full. Capacity never shrinks except through [`DynamicArray::clear`].

use core::fmt;

use tracing::{debug, trace};

use crate::error::{DynamicArrayError, Result};
use crate::generic::growth::{capacity_for, next_capacity, INITIAL_CAPACITY};

const ABSENT_INSERT: &str = "cannot insert an absent value";
const ABSENT_SEARCH: &str = "cannot search for an absent value";

/// A growable list backed by a contiguous slice of slots.
///
/// Elements live densely in slots `[0, len)`; every slot at or past `len` is
/// empty. Insertions that find the store full double its capacity before the
/// new element is placed, which keeps back insertion amortized O(1).
///
/// Value arguments accept either a bare `T` or an `Option<T>`. `None` stands
/// for an absent value and is rejected before any mutation.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let mut array: DynamicArray<i32> = DynamicArray::new();
/// array.insert_back(2).unwrap();
/// array.insert_front(1).unwrap();
/// array.insert_at(2, 3).unwrap();
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.get(0), Ok(&1));
/// assert_eq!(array.remove_back(), Some(3));
/// assert_eq!(array.remove_at(0), Ok(1));
/// ```
///
/// # Memory Layout
///
/// The array owns a boxed slice of `Option<T>` slots followed by a length
/// field. Growth allocates a fresh slice and moves every live element across,
/// so no element is ever cloned.
#[derive(Clone)]
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`INITIAL_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynamic_array::{DynamicArray, INITIAL_CAPACITY};
    ///
    /// let array: DynamicArray<u32> = DynamicArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), INITIAL_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self {
            slots: empty_slots(INITIAL_CAPACITY),
            len: 0,
        }
    }

    /// Returns the number of elements in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` at `index`, shifting the elements at `[index, len)` one
    /// slot to the right.
    ///
    /// Inserting at `len` appends. Costs O(len - index).
    ///
    /// # Errors
    ///
    /// * [`DynamicArrayError::OutOfBounds`] if `index > len`.
    /// * [`DynamicArrayError::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynamic_array::{DynamicArray, DynamicArrayError};
    ///
    /// let mut array: DynamicArray<char> = DynamicArray::new();
    /// array.insert_at(0, 'b').unwrap();
    /// array.insert_at(0, 'a').unwrap();
    /// array.insert_at(2, 'c').unwrap();
    /// assert_eq!(array.get(1), Ok(&'b'));
    ///
    /// assert!(matches!(
    ///     array.insert_at(5, 'z'),
    ///     Err(DynamicArrayError::OutOfBounds { index: 5, len: 3 })
    /// ));
    /// assert!(matches!(
    ///     array.insert_at(0, None),
    ///     Err(DynamicArrayError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn insert_at(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<()> {
        if index > self.len {
            trace!(index, len = self.len, "rejected insertion past the end");
            return Err(DynamicArrayError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        let value = Self::require(value.into(), ABSENT_INSERT)?;

        if self.is_full() {
            self.grow()?;
        }
        self.shift_right_from(index);
        self.slots[index] = Some(value);
        self.len += 1;

        Ok(())
    }

    /// Inserts `value` at index 0, shifting every element one slot to the
    /// right. Costs O(len).
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::InvalidArgument`] if `value` is `None`.
    pub fn insert_front(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let value = Self::require(value.into(), ABSENT_INSERT)?;

        // No room left once the final slot holds an element.
        if matches!(self.slots.last(), Some(Some(_))) {
            self.grow()?;
        }
        self.shift_right_from(0);
        self.slots[0] = Some(value);
        self.len += 1;

        Ok(())
    }

    /// Appends `value` after the last element. Amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = DynamicArray::new();
    /// for i in 1..=10 {
    ///     array.insert_back(i).unwrap();
    /// }
    /// assert_eq!(array.len(), 10);
    /// assert_eq!(array.capacity(), 18);
    /// ```
    pub fn insert_back(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let value = Self::require(value.into(), ABSENT_INSERT)?;

        if self.is_full() {
            self.grow()?;
        }
        self.slots[self.len] = Some(value);
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the elements after
    /// it one slot to the left. O(1) for the last index, O(len) otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfBounds`] if `index >= len`, including
    /// on an empty array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynamic_array::{DynamicArray, DynamicArrayError};
    ///
    /// let mut array: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(
    ///     array.remove_at(0),
    ///     Err(DynamicArrayError::OutOfBounds { index: 0, len: 0 })
    /// );
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        self.take_at(index)
            .ok_or(DynamicArrayError::OutOfBounds { index, len })
    }

    /// Removes and returns the first element, or `None` if the array is empty.
    /// Costs O(len).
    pub fn remove_front(&mut self) -> Option<T> {
        self.take_at(0)
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    /// O(1), no shifting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array: DynamicArray<u32> = DynamicArray::new();
    /// assert_eq!(array.remove_back(), None);
    ///
    /// array.insert_back(42).unwrap();
    /// assert_eq!(array.remove_back(), Some(42));
    /// ```
    pub fn remove_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        let removed = self.slots[last].take()?;
        self.len = last;
        Some(removed)
    }

    /// Returns a reference to the element at `index`. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(DynamicArrayError::OutOfBounds {
                index,
                len: self.len,
            })
    }

    /// Returns the highest index holding an element equal to `value`, or
    /// `Ok(None)` when there is no match. Every index down to and including 0
    /// is compared.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let array: DynamicArray<_> = ["a", "b", "a", "c"].into_iter().collect();
    /// assert_eq!(array.last_index_of(&"a"), Ok(Some(2)));
    /// assert_eq!(array.last_index_of(&"c"), Ok(Some(3)));
    /// assert_eq!(array.last_index_of(&"z"), Ok(None));
    /// ```
    pub fn last_index_of<'a>(&self, value: impl Into<Option<&'a T>>) -> Result<Option<usize>>
    where
        T: PartialEq + 'a,
    {
        let value = Self::require(value.into(), ABSENT_SEARCH)?;

        Ok(self
            .live()
            .iter()
            .rposition(|slot| slot.as_ref() == Some(value)))
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.live().iter().any(|slot| slot.as_ref() == Some(value))
    }

    /// Drops every element and replaces the backing store with a fresh one of
    /// [`INITIAL_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynamic_array::{DynamicArray, INITIAL_CAPACITY};
    ///
    /// let mut array: DynamicArray<_> = (0..100).collect();
    /// assert!(array.capacity() > INITIAL_CAPACITY);
    ///
    /// array.clear();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), INITIAL_CAPACITY);
    /// assert!(array.get(0).is_err());
    /// ```
    pub fn clear(&mut self) {
        trace!(
            len = self.len,
            capacity = self.capacity(),
            "discarding backing store"
        );
        self.slots = empty_slots(INITIAL_CAPACITY);
        self.len = 0;
    }

    fn require<V>(value: Option<V>, reason: &'static str) -> Result<V> {
        value.ok_or_else(|| {
            trace!(reason, "rejected absent argument");
            DynamicArrayError::InvalidArgument(reason)
        })
    }

    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = next_capacity(self.capacity())?;
        self.reallocate(new_capacity);
        Ok(())
    }

    /// Grows the store, in one reallocation, to the capacity repeated doubling
    /// would reach for `total` elements.
    fn reserve_total(&mut self, total: usize) -> Result<()> {
        let target = capacity_for(total)?;
        if target > self.capacity() {
            self.reallocate(target);
        }
        Ok(())
    }

    fn reallocate(&mut self, new_capacity: usize) {
        debug!(
            old_capacity = self.capacity(),
            new_capacity,
            len = self.len,
            "growing backing store"
        );
        let mut grown = empty_slots(new_capacity);
        for (dst, src) in grown.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.slots = grown;
    }

    /// Moves `[index, len)` one slot right, highest index first. The caller
    /// guarantees `len < capacity`.
    fn shift_right_from(&mut self, index: usize) {
        for i in (index..self.len).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
    }

    /// Takes the element at `index` and closes the gap. Returns `None` without
    /// touching anything when `index >= len`.
    fn take_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let removed = self.slots[index].take()?;
        for i in index + 1..self.len {
            self.slots[i - 1] = self.slots[i].take();
        }
        self.len -= 1;
        Some(removed)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live().iter().flatten()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let _ = self.reserve_total(self.len.saturating_add(lower));

        for item in iter {
            let _ = self.insert_back(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}
