//! The growable array with a pluggable sort strategy.
//!
//! [`Vector`] keeps its own backing buffer whose length *is* the capacity: slots
//! past `count` hold `T::default()`. This makes capacity an exact, observable
//! quantity. Growth adds [`GROWTH_INCREMENT`] slots at a time rather than
//! doubling, and sorting truncates the buffer to exactly `count` slots.
//!
//! A `Vector` is `Send` (strategies must be `Send`) but not `Sync`: it is not
//! designed for concurrent access. Share it between threads behind a `Mutex`.

use crate::algo::NativeSort;
use crate::core::{Comparator, NaturalOrder, SortStrategy};
use crate::error::VectorError;
use log::{debug, trace};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Capacity of a vector created with [`Vector::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Number of slots added each time a full vector needs room for one more element.
pub const GROWTH_INCREMENT: usize = 10;

static NATIVE: NativeSort = NativeSort;

/// A boxed strategy as stored by [`Vector`].
pub type BoxedStrategy<T> = Box<dyn SortStrategy<T> + Send>;

/// The assigned strategy, or [`NativeSort`] when none is set.
fn resolve<T>(strategy: &Option<BoxedStrategy<T>>) -> &dyn SortStrategy<T> {
    match strategy {
        Some(strategy) => strategy.as_ref(),
        None => &NATIVE,
    }
}

/// A growable array that delegates sorting to a replaceable [`SortStrategy`].
///
/// # Examples
///
/// ```
/// use stratvec::prelude::*;
///
/// let mut v = Vector::new();
/// for x in [5, 3, 1, 4, 1] {
///     v.push(x);
/// }
///
/// v.set_strategy(Some(Box::new(BottomUpMergeSort)));
/// v.sort();
///
/// assert_eq!(v.as_slice(), &[1, 1, 3, 4, 5]);
/// assert_eq!(v.capacity(), 5);
/// ```
pub struct Vector<T> {
    data: Vec<T>,
    count: usize,
    strategy: Option<BoxedStrategy<T>>,
}

impl<T: Default> Vector<T> {
    /// Creates an empty vector with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            data: Self::blank(DEFAULT_CAPACITY),
            count: 0,
            strategy: None,
        }
    }

    /// Creates an empty vector with exactly `capacity` slots.
    ///
    /// Fails with [`VectorError::InvalidArgument`] if `capacity` elements of `T`
    /// could never fit in a single allocation.
    pub fn with_capacity(capacity: usize) -> Result<Self, VectorError> {
        let elem = std::mem::size_of::<T>().max(1);
        if capacity > isize::MAX as usize / elem {
            return Err(VectorError::InvalidArgument(format!(
                "capacity {capacity} exceeds the maximum allocation size"
            )));
        }

        Ok(Self {
            data: Self::blank(capacity),
            count: 0,
            strategy: None,
        })
    }

    fn blank(capacity: usize) -> Vec<T> {
        let mut data = Vec::with_capacity(capacity);
        data.resize_with(capacity, T::default);
        data
    }

    /// Extends the buffer by `extra` slots, moving the live elements over in order.
    fn extend_capacity(&mut self, extra: usize) {
        let old = self.data.len();
        let mut grown = Self::blank(old + extra);
        for (slot, value) in grown.iter_mut().zip(self.data.drain(..self.count)) {
            *slot = value;
        }
        self.data = grown;
        debug!("vector grew from {old} to {} slots", self.data.len());
    }

    fn ensure_room(&mut self) {
        if self.count == self.data.len() {
            self.extend_capacity(GROWTH_INCREMENT);
        }
    }

    /// Appends `element` after the last element, growing the buffer if it is full.
    #[doc(alias = "add")]
    pub fn push(&mut self, element: T) {
        self.ensure_room();
        self.data[self.count] = element;
        self.count += 1;
    }

    /// Inserts `element` at `index`, shifting everything from `index` onward one slot right.
    ///
    /// `index == len()` appends. Fails with [`VectorError::IndexOutOfRange`] if
    /// `index > len()`, in which case nothing is changed.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), VectorError> {
        if index > self.count {
            return Err(self.out_of_range(index));
        }

        self.ensure_room();
        // The slot at `count` holds a default value; rotating it down to `index`
        // shifts [index, count) right by one.
        self.data[index..=self.count].rotate_right(1);
        self.data[index] = element;
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail one slot left.
    ///
    /// The vacated trailing slot is reset to `T::default()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, VectorError> {
        if index >= self.count {
            return Err(self.out_of_range(index));
        }

        let removed = std::mem::take(&mut self.data[index]);
        self.data[index..self.count].rotate_left(1);
        self.count -= 1;
        Ok(removed)
    }

    /// Removes the first element equal to `element`. Returns whether one was found.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes every element matching `predicate` and returns how many were removed.
    ///
    /// Elements are visited from the back so removals never skip a candidate.
    pub fn remove_all<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        for i in (0..self.count).rev() {
            if predicate(&self.data[i]) && self.remove_at(i).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    /// Drops every element. Capacity is kept; all slots are reset to `T::default()`.
    pub fn clear(&mut self) {
        self.data = Self::blank(self.data.len());
        self.count = 0;
    }

    /// Returns a new vector holding every element matching `predicate`, in order.
    ///
    /// The new vector starts at [`DEFAULT_CAPACITY`] and uses the default strategy.
    pub fn find_all<P>(&self, mut predicate: P) -> Vector<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut found = Vector::new();
        for item in self.iter().filter(|item| predicate(item)) {
            found.push(item.clone());
        }
        found
    }
}

impl<T> Vector<T> {
    /// Number of elements in the vector.
    #[doc(alias = "count")]
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The live elements `[0, len())`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.count]
    }

    /// Iterates over the live elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    fn out_of_range(&self, index: usize) -> VectorError {
        VectorError::IndexOutOfRange {
            index,
            count: self.count,
        }
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, VectorError> {
        self.as_slice().get(index).ok_or_else(|| self.out_of_range(index))
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        if index >= self.count {
            return Err(self.out_of_range(index));
        }
        self.data[index] = value;
        Ok(())
    }

    /// Index of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == element)
    }

    /// Returns `true` if some element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// First element matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    /// Largest element under `T`'s natural order; the first one wins on ties.
    ///
    /// Fails with [`VectorError::EmptyContainer`] when there are no elements,
    /// regardless of capacity.
    pub fn max(&self) -> Result<&T, VectorError>
    where
        T: Ord,
    {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or(VectorError::EmptyContainer)?;
        Ok(rest.iter().fold(first, |best, item| if item > best { item } else { best }))
    }

    /// Smallest element under `T`'s natural order; the last one wins on ties.
    pub fn min(&self) -> Result<&T, VectorError>
    where
        T: Ord,
    {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or(VectorError::EmptyContainer)?;
        Ok(rest.iter().fold(first, |best, item| if item <= best { item } else { best }))
    }

    /// Renders the elements separated by `", "`.
    ///
    /// Fails with [`VectorError::EmptyContainer`] on an empty vector.
    pub fn to_text(&self) -> Result<String, VectorError>
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return Err(VectorError::EmptyContainer);
        }
        Ok(self.to_string())
    }

    /// The strategy used by [`sort`](Self::sort). [`NativeSort`] when none was assigned.
    pub fn strategy(&self) -> &dyn SortStrategy<T> {
        resolve(&self.strategy)
    }

    /// Replaces the sort strategy. `None` reverts to [`NativeSort`].
    pub fn set_strategy(&mut self, strategy: Option<BoxedStrategy<T>>) {
        self.strategy = strategy;
    }

    /// Builder-style [`set_strategy`](Self::set_strategy).
    pub fn with_strategy(mut self, strategy: BoxedStrategy<T>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Sorts by `T`'s natural order.
    ///
    /// The buffer is first truncated to exactly `len()` slots, so afterwards
    /// `capacity() == len()`.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(&NaturalOrder);
    }

    /// Sorts with `cmp`, or by natural order when `cmp` is `None`.
    pub fn sort_with(&mut self, cmp: Option<&dyn Comparator<T>>)
    where
        T: Ord,
    {
        match cmp {
            Some(cmp) => self.sort_by(cmp),
            None => self.sort(),
        }
    }

    /// Sorts with the given comparator. Truncates capacity like [`sort`](Self::sort).
    pub fn sort_by(&mut self, cmp: &dyn Comparator<T>) {
        if self.data.len() != self.count {
            trace!(
                "truncating buffer from {} to {} slots before sort",
                self.data.len(),
                self.count
            );
            self.data.truncate(self.count);
            self.data.shrink_to_fit();
        }

        // Field-level borrow so `self.data` stays mutably borrowable.
        let strategy = resolve(&self.strategy);
        debug!("sorting {} elements with {} strategy", self.count, strategy.name());
        strategy.sort(&mut self.data, cmp);
    }
}

impl<T: Default> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[..self.count][index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("items", &self.as_slice())
            .field("capacity", &self.capacity())
            .field("strategy", &self.strategy().name())
            .finish()
    }
}

/// Compares live elements only; capacity and strategy are ignored.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Default> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Default> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Vector::new();
        v.extend(iter);
        v
    }
}
