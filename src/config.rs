/*!
This module contains global configuration constants for the collections.

Behavior that callers are expected to tune (ordering, hashing) is injected at construction time
instead. The values here are fixed properties of the data structure layouts.
*/

/**
The position of the root of a binary heap within its backing array.

The parent of the element at position `i` is at `(i - 1) / 2` and its children are at `2i + 1` and
`2i + 2`.
*/
pub(crate) const HEAP_ROOT_INDEX: usize = 0;

/**
The number of element slots reserved when a collection is created without initial items.
*/
pub(crate) const DEFAULT_INITIAL_CAPACITY: usize = 8;
