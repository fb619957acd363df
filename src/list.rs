// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
This module provides [`List`], a dynamic, index addressable sequence.

# Indexing

Every index argument is an `isize`. A negative index counts from the end of the list, so `-1` refers
to the last element and `-size` to the first. Formally, the canonical index of `i` is `i + size` when
`i` is negative and `i` otherwise.

# Comparators

A list is not kept sorted. Its comparator is only used to answer questions about the elements:
equality for searches ([`List::index_of`], [`List::contains`], [`List::delete_item`]) and ordering for
extremum queries ([`List::min`], [`List::max`]).
*/

use std::cmp::Ordering;
use std::slice::Iter;
use std::vec::IntoIter;

use crate::comparator::{AscendingRelationalComparator, Comparator};
use crate::config::DEFAULT_INITIAL_CAPACITY;
use crate::element::{Nested, Placeholder, Truthiness};
use crate::errors::{CollectionsError, CollectionsResult};

/**
A dynamic sequence supporting negative indexing, insertion past its end, recursive flattening and
comparator based searches.

# Example

```
use flowpath::List;

let mut list = List::from_items(vec![Some(4), Some(5), Some(6)]);
list.insert(5, Some(7)).unwrap();

assert_eq!(list.to_array(), vec![Some(4), Some(5), Some(6), None, None, Some(7)]);
assert_eq!(list.get(-1), Some(&Some(7)));
assert_eq!(list.index_of(&Some(6)), Some(2));
```
*/
#[derive(Clone, Debug)]
pub struct List<T, C = AscendingRelationalComparator> {
    /// The elements of the list.
    items: Vec<T>,

    /// The comparator used for searches and extremum queries.
    comparator: C,
}

/// Constructors using the default comparator.
impl<T> List<T, AscendingRelationalComparator> {
    /// Create a new, empty [`List`].
    pub fn new() -> Self {
        Self::with_comparator(AscendingRelationalComparator)
    }

    /// Create a new [`List`] holding `items`.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_items_with_comparator(items, AscendingRelationalComparator)
    }

    /**
    Create a new [`List`] holding a copy of the contents of `other`.

    The container is copied and the elements are cloned, so later changes to either list are not
    visible in the other.
    */
    pub fn from_list<D>(other: &List<T, D>) -> Self
    where
        T: Clone,
    {
        Self::from_items(other.iter().cloned())
    }
}

/// Public methods
impl<T, C> List<T, C> {
    /// Create a new, empty [`List`] that uses `comparator` for searches.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_INITIAL_CAPACITY),
            comparator,
        }
    }

    /// Create a new [`List`] holding `items` that uses `comparator` for searches.
    pub fn from_items_with_comparator<I>(items: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
            comparator,
        }
    }

    /**
    Get the element at `index`.

    Returns `None` if `index` is outside of `[-size, size - 1]`.
    */
    pub fn get(&self, index: isize) -> Option<&T> {
        self.resolve_index(index).map(|position| &self.items[position])
    }

    /// Get the first element or `None` if the list is empty.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Get the last element or `None` if the list is empty.
    pub fn last(&self) -> Option<&T> {
        self.get(-1)
    }

    /// Get the number of elements in the list.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty, otherwise false.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Remove all elements from the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append an item to the end of the list.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Append the items to the end of the list in the order they are yielded.
    pub fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
    }

    /// Append the contents of `other` to the end of the list.
    pub fn add_list<D>(&mut self, other: &List<T, D>)
    where
        T: Clone,
    {
        self.add_all(other.iter().cloned());
    }

    /// Insert an item at the front of the list.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Insert the items at the front of the list. The items keep their relative order.
    pub fn prepend_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_block(0, items);
    }

    /// Insert the contents of `other` at the front of the list.
    pub fn prepend_list<D>(&mut self, other: &List<T, D>)
    where
        T: Clone,
    {
        self.prepend_all(other.iter().cloned());
    }

    /**
    Remove and return the element at `index`.

    Returns `None` and leaves the list unchanged if `index` is outside of `[-size, size - 1]`.
    */
    pub fn delete_at(&mut self, index: isize) -> Option<T> {
        self.resolve_index(index)
            .map(|position| self.items.remove(position))
    }

    /**
    Replace the element at `index` with `item`, returning the element that was replaced.

    # Errors

    Returns [`CollectionsError::IndexOutOfRange`] if `index` is outside of `[-size, size - 1]`. The
    list is left unchanged.
    */
    pub fn replace(&mut self, index: isize, item: T) -> CollectionsResult<T> {
        match self.resolve_index(index) {
            Some(position) => Ok(std::mem::replace(&mut self.items[position], item)),
            None => Err(CollectionsError::IndexOutOfRange {
                index,
                min: -self.signed_size(),
                max: self.signed_size() - 1,
            }),
        }
    }

    /// Reverse the order of the elements in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Call `f` with every element and its index, in order.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.items.iter().enumerate() {
            f(item, index);
        }
    }

    /**
    Call `f` with every element and its index, in order, until `f` produces a stopping signal.

    See [`Truthiness`] for what counts as a stopping signal. Notably `0` and the empty string do not
    stop iteration.

    Returns:

    1. `None` if the list is empty
    1. `Some(index)` of the element for which `f` produced a stopping signal
    1. `Some(size)` if `f` never produced a stopping signal
    */
    pub fn each_while<F, R>(&self, mut f: F) -> Option<usize>
    where
        F: FnMut(&T, usize) -> R,
        R: Truthiness,
    {
        if self.is_empty() {
            return None;
        }

        for (index, item) in self.items.iter().enumerate() {
            if f(item, index).is_stopping_signal() {
                return Some(index);
            }
        }

        Some(self.size())
    }

    /**
    Create a new list holding the result of calling `f` on every element and its index.

    The new list uses a copy of this list's comparator.
    */
    pub fn collect<U, F>(&self, mut f: F) -> List<U, C>
    where
        C: Clone,
        F: FnMut(&T, usize) -> U,
    {
        List::from_items_with_comparator(
            self.items
                .iter()
                .enumerate()
                .map(|(index, item)| f(item, index)),
            self.comparator.clone(),
        )
    }

    /// Fold the elements from front to back, starting with `seed`.
    pub fn inject<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        self.items
            .iter()
            .enumerate()
            .fold(seed, |accumulator, (index, item)| f(accumulator, item, index))
    }

    /**
    Returns true if `f` lets iteration continue for at least one element.

    The same stopping signals as [`List::each_while`] apply.
    */
    pub fn any<F, R>(&self, mut f: F) -> bool
    where
        F: FnMut(&T, usize) -> R,
        R: Truthiness,
    {
        self.items
            .iter()
            .enumerate()
            .any(|(index, item)| f(item, index).is_truthy())
    }

    /// Returns true if at least one of the elements is not a stopping signal.
    pub fn any_truthy(&self) -> bool
    where
        T: Truthiness,
    {
        self.items.iter().any(Truthiness::is_truthy)
    }

    /// Return a copy of the elements as a vector.
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /**
    Get a reference to the vector backing this list.

    Unlike [`List::to_array`], this is not a copy.
    */
    pub fn raw(&self) -> &Vec<T> {
        &self.items
    }

    /**
    Get a mutable reference to the vector backing this list.

    Changes made through the returned reference are changes to the list itself.
    */
    pub fn raw_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Return an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Get a reference to the comparator used by this list.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

/// Insertion at arbitrary positions.
impl<T, C> List<T, C>
where
    T: Placeholder,
{
    /**
    Insert `item` so that it ends up at `index`.

    Elements from `index` onward are shifted one position toward the end. If `index` is past the
    end of the list, the slots between the current end and `index` are filled with
    [`Placeholder::placeholder`] values.

    # Errors

    Returns [`CollectionsError::IndexBelowMinimum`] if `index` is less than `-size`. The list is
    left unchanged.
    */
    pub fn insert(&mut self, index: isize, item: T) -> CollectionsResult<()> {
        self.insert_all(index, std::iter::once(item))
    }

    /**
    Insert a block of items starting at `index`. The items keep their relative order.

    The same index policy as [`List::insert`] applies.

    # Errors

    Returns [`CollectionsError::IndexBelowMinimum`] if `index` is less than `-size`. The list is
    left unchanged.
    */
    pub fn insert_all<I>(&mut self, index: isize, items: I) -> CollectionsResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        let min_index = -self.signed_size();
        if index < min_index {
            return Err(CollectionsError::IndexBelowMinimum {
                index,
                min: min_index,
            });
        }

        // The check above guarantees that the canonical index is not negative
        let position = self.canonical_index(index) as usize;
        if position > self.items.len() {
            log::debug!(
                "Filling {} skipped slots with placeholders to insert at index {}.",
                position - self.items.len(),
                index
            );
            self.items.resize_with(position, T::placeholder);
        }

        self.insert_block(position, items);

        Ok(())
    }

    /// Insert the contents of `other` starting at `index`. See [`List::insert_all`].
    pub fn insert_list<D>(&mut self, index: isize, other: &List<T, D>) -> CollectionsResult<()>
    where
        T: Clone,
    {
        self.insert_all(index, other.iter().cloned())
    }
}

/// Comparator based queries.
impl<T, C> List<T, C>
where
    C: Comparator<T>,
{
    /**
    Remove the first element that the comparator considers equal to `item`.

    Returns true if an element was removed and false if there was no match.
    */
    pub fn delete_item(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    /// Returns true if the comparator considers one of the elements equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Get the index of the first element equal to `item` or `None` if there is no such element.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|candidate| self.comparator.compare(candidate, item) == Ordering::Equal)
    }

    /// Get the index of the last element equal to `item` or `None` if there is no such element.
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.items
            .iter()
            .rposition(|candidate| self.comparator.compare(candidate, item) == Ordering::Equal)
    }

    /**
    Get the smallest element according to the comparator or `None` if the list is empty.

    If several elements are equally small, the first of them is returned.
    */
    pub fn min(&self) -> Option<&T> {
        self.extremum(Ordering::Less)
    }

    /**
    Get the largest element according to the comparator or `None` if the list is empty.

    If several elements are equally large, the first of them is returned.
    */
    pub fn max(&self) -> Option<&T> {
        self.extremum(Ordering::Greater)
    }
}

/// Flattening.
impl<T, C> List<T, C>
where
    T: Nested + Clone,
{
    /**
    Create a new list in which every nested collection is replaced by its elements, recursively.

    Elements are kept in the order they are encountered. The new list uses a copy of this list's
    comparator.
    */
    pub fn flatten(&self) -> List<T, C>
    where
        C: Clone,
    {
        self.flatten_with(self.comparator.clone())
    }

    /// Same as [`List::flatten`] but the new list uses `comparator`.
    pub fn flatten_with<D>(&self, comparator: D) -> List<T, D> {
        let mut flattened = Vec::with_capacity(self.items.len());

        // Iterators over the collections currently being walked, innermost last
        let mut pending: Vec<Iter<'_, T>> = vec![self.items.iter()];
        while let Some(current) = pending.last_mut() {
            match current.next() {
                None => {
                    pending.pop();
                }
                Some(item) => match item.nested_items() {
                    Some(nested) => pending.push(nested.iter()),
                    None => flattened.push(item.clone()),
                },
            }
        }

        List::from_items_with_comparator(flattened, comparator)
    }
}

/// Private methods
impl<T, C> List<T, C> {
    /// The size of the list as a signed integer for index arithmetic.
    fn signed_size(&self) -> isize {
        // A `Vec` never holds more than `isize::MAX` bytes so this does not wrap
        self.items.len() as isize
    }

    /// Map a possibly negative index to its non-negative counterpart.
    fn canonical_index(&self, index: isize) -> isize {
        if index < 0 {
            index + self.signed_size()
        } else {
            index
        }
    }

    /// Insert the items before the element at `position`, which must be at most the size.
    fn insert_block<I>(&mut self, position: usize, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let tail = self.items.split_off(position);
        self.items.extend(items);
        self.items.extend(tail);
    }

    /// Map `index` to a position in the backing vector if it refers to an existing element.
    fn resolve_index(&self, index: isize) -> Option<usize> {
        let canonical_index = self.canonical_index(index);
        if canonical_index < 0 || canonical_index >= self.signed_size() {
            return None;
        }

        Some(canonical_index as usize)
    }

    /**
    Find the first element for which no later element compares with `ordering` against it.

    `ordering` is [`Ordering::Less`] for the minimum and [`Ordering::Greater`] for the maximum.
    */
    fn extremum(&self, ordering: Ordering) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let mut items = self.items.iter();
        let first = items.next()?;

        Some(items.fold(first, |current, candidate| {
            if self.comparator.compare(candidate, current) == ordering {
                candidate
            } else {
                current
            }
        }))
    }
}

impl<T> Default for List<T, AscendingRelationalComparator> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists are equal when they hold equal elements in the same order. Comparators are not considered.
impl<T, C, D> PartialEq<List<T, D>> for List<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &List<T, D>) -> bool {
        self.items == other.items
    }
}

impl<T> From<Vec<T>> for List<T, AscendingRelationalComparator> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            comparator: AscendingRelationalComparator,
        }
    }
}

impl<T, C> FromIterator<T> for List<T, C>
where
    C: Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items_with_comparator(iter, C::default())
    }
}

impl<T, C> Extend<T> for List<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, C> IntoIterator for List<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a List<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
