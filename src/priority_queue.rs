/*!
This module provides a priority queue backed by a binary min-heap.

The ordering of the queue is entirely determined by the [`Comparator`] it is created with. The
element that the comparator considers the smallest is always at the head of the queue. By default
the queue uses the [`AscendingRelationalComparator`], yielding elements in ascending order.

# Heap layout

The heap is stored in a vector where the root lives at index 0, and the children of the element at
index `i` live at `2i + 1` and `2i + 2`. For every element other than the root, comparing the element
with its parent never yields [`Ordering::Less`](std::cmp::Ordering::Less).

The heap is not stable. Elements that compare as equal may be polled in any order.
*/

use std::cmp::Ordering;
use std::slice::Iter;

use crate::comparator::{AscendingRelationalComparator, Comparator};
use crate::config::{DEFAULT_INITIAL_CAPACITY, HEAP_ROOT_INDEX};
use crate::element::Element;
use crate::errors::{CollectionsError, CollectionsResult};

/**
A priority queue ordered by a comparator.

# Example

```
use flowpath::{DescendingRelationalComparator, PriorityQueue};

let mut queue =
    PriorityQueue::from_items_with_comparator(vec![6, 9, 8], DescendingRelationalComparator::new())
        .unwrap();
queue.add(7).unwrap();

assert_eq!(queue.poll(), Some(9));
assert_eq!(queue.poll(), Some(8));
assert_eq!(queue.peek(), Some(&7));
```
*/
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, C = AscendingRelationalComparator> {
    /// The backing array holding the heap.
    queue: Vec<T>,

    /// The comparator used to order the elements. The queue never mutates it.
    comparator: C,
}

/// Constructors using the default comparator.
impl<T> PriorityQueue<T, AscendingRelationalComparator> {
    /// Create a new, empty [`PriorityQueue`] that polls elements in ascending order.
    pub fn new() -> Self {
        Self::with_comparator(AscendingRelationalComparator)
    }
}

impl<T> PriorityQueue<T, AscendingRelationalComparator>
where
    T: Element + PartialOrd,
{
    /**
    Create a new [`PriorityQueue`] holding `items` in ascending order.

    # Errors

    Returns [`CollectionsError::AbsentElement`] if one of the items is absent.
    */
    pub fn from_items<I>(items: I) -> CollectionsResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_items_with_comparator(items, AscendingRelationalComparator)
    }

    /**
    Create a new [`PriorityQueue`] holding a copy of the contents of `other` in ascending order.

    The new queue does not share anything with `other`. Changes to either queue are not visible in
    the other.
    */
    pub fn from_queue<D>(other: &PriorityQueue<T, D>) -> Self
    where
        T: Clone,
    {
        let mut queue = Self::new();
        queue.add_all_from(other);

        queue
    }
}

impl<T> Default for PriorityQueue<T, AscendingRelationalComparator> {
    fn default() -> Self {
        Self::new()
    }
}

/// Public methods
impl<T, C> PriorityQueue<T, C> {
    /// Create a new, empty [`PriorityQueue`] ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            queue: Vec::with_capacity(DEFAULT_INITIAL_CAPACITY),
            comparator,
        }
    }

    /**
    Get the highest priority item without modifying the queue.

    Returns `None` if the queue is empty. Use [`PriorityQueue::poll`] to retrieve and remove an item
    at once.
    */
    pub fn peek(&self) -> Option<&T> {
        self.queue.get(HEAP_ROOT_INDEX)
    }

    /// Get the number of elements in the queue.
    pub fn size(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if the queue is empty, otherwise false.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Remove all elements from the queue.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /**
    Return an iterator over the elements of the queue.

    The elements are visited in the order of the backing heap, which is **not** priority order.
    */
    pub fn iter(&self) -> Iter<'_, T> {
        self.queue.iter()
    }

    /// Get a reference to the comparator ordering this queue.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Comparator<T>,
{
    /**
    Remove and return the item with the highest priority.

    Returns `None` if the queue is empty.
    */
    pub fn poll(&mut self) -> Option<T> {
        if self.queue.len() <= 1 {
            return self.queue.pop();
        }

        // Move the last element into the root and restore the heap from there
        let polled = self.queue.swap_remove(HEAP_ROOT_INDEX);
        self.sift_down(HEAP_ROOT_INDEX);

        Some(polled)
    }

    /// Consume the queue and return its elements in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.size());
        while let Some(item) = self.poll() {
            sorted.push(item);
        }

        sorted
    }

    /**
    Add every element of `other` to this queue.

    The contents of `other` are cloned and `other` is left unchanged. Elements held by a queue were
    already checked on insertion so this cannot fail.
    */
    pub fn add_all_from<D>(&mut self, other: &PriorityQueue<T, D>)
    where
        T: Clone,
    {
        self.queue.reserve(other.size());
        for item in other.iter() {
            self.push(item.clone());
        }
    }
}

impl<T, C> PriorityQueue<T, C>
where
    T: Element,
    C: Comparator<T>,
{
    /**
    Create a new [`PriorityQueue`] holding `items`, ordered by `comparator`.

    # Errors

    Returns [`CollectionsError::AbsentElement`] if one of the items is absent.
    */
    pub fn from_items_with_comparator<I>(items: I, comparator: C) -> CollectionsResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::with_comparator(comparator);
        queue.add_all(items)?;

        Ok(queue)
    }

    /**
    Add a single item to the queue.

    A collection passed here is added as one element. Use [`PriorityQueue::add_all`] to add the
    contents of a collection.

    # Errors

    Returns [`CollectionsError::AbsentElement`] if the item is absent. The queue is left unchanged.
    */
    pub fn add(&mut self, item: T) -> CollectionsResult<()> {
        if item.is_absent() {
            log::warn!("Rejecting an attempt to add an absent item to the priority queue.");
            return Err(CollectionsError::AbsentElement);
        }

        self.push(item);

        Ok(())
    }

    /**
    Add multiple items to the queue.

    Each item goes through [`PriorityQueue::add`] in the order the items are yielded.

    # Errors

    Returns [`CollectionsError::AbsentElement`] at the first absent item. Items yielded before it
    remain in the queue and the remaining items are not added.
    */
    pub fn add_all<I>(&mut self, items: I) -> CollectionsResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add(item)?;
        }

        Ok(())
    }
}

/// Private methods
impl<T, C> PriorityQueue<T, C>
where
    C: Comparator<T>,
{
    /// Append the item to the backing array and restore the heap property.
    fn push(&mut self, item: T) {
        self.queue.push(item);
        self.sift_up(self.queue.len() - 1);
    }

    /**
    Move the element at `initial_index` toward the root while it is strictly smaller than its
    parent.
    */
    fn sift_up(&mut self, initial_index: usize) {
        let mut current_index = initial_index;
        while current_index > HEAP_ROOT_INDEX {
            let parent_index = (current_index - 1) / 2;
            if self
                .comparator
                .compare(&self.queue[current_index], &self.queue[parent_index])
                != Ordering::Less
            {
                break;
            }

            self.queue.swap(current_index, parent_index);
            current_index = parent_index;
        }

        log::trace!(
            "Sifted the element at position {} up to position {}.",
            initial_index,
            current_index
        );
    }

    /**
    Move the element at `initial_index` toward the leaves while one of its children is strictly
    smaller than it.

    When both children exist, the smaller of the two is chosen. The left child wins ties.
    */
    fn sift_down(&mut self, initial_index: usize) {
        let length = self.queue.len();
        let mut current_index = initial_index;
        loop {
            let left_child_index = (current_index * 2) + 1;
            if left_child_index >= length {
                break;
            }

            let right_child_index = left_child_index + 1;
            let min_child_index = if right_child_index < length
                && self.comparator.compare(
                    &self.queue[right_child_index],
                    &self.queue[left_child_index],
                ) == Ordering::Less
            {
                right_child_index
            } else {
                left_child_index
            };

            if self
                .comparator
                .compare(&self.queue[min_child_index], &self.queue[current_index])
                != Ordering::Less
            {
                break;
            }

            self.queue.swap(min_child_index, current_index);
            current_index = min_child_index;
        }

        log::trace!(
            "Sifted the element at position {} down to position {}.",
            initial_index,
            current_index
        );
    }
}
