/*!
Flowpath is a small toolkit of collections whose ordering is pluggable. Every structure is
parameterized by a [`Comparator`] that is injected at construction time, and never compares its
elements any other way.

The collections are:

1. [`PriorityQueue`], a binary min-heap that always yields the element its comparator considers
   the smallest
1. [`List`], a dynamic sequence with negative indexing, insertion past its end with gap filling,
   recursive flattening and comparator based searches
1. [`Map`], a key-value dictionary that identifies keys by a string hash code

# Absence

Operations that may legitimately find nothing (peeking an empty queue, looking up an index that is
out of range, searching for a missing element) return [`Option::None`]. Errors are reserved for
invalid requests and are reported with [`CollectionsError`].

# Concurrency

None of the collections synchronize internally. They are meant to be used from one thread at a time
and callers must provide their own synchronization otherwise.
*/

#![warn(missing_debug_implementations, missing_docs)]

mod config;

pub mod comparator;
pub use comparator::{
    AscendingRelationalComparator, CompareTo, CompareToComparator, Comparator,
    DescendingRelationalComparator, FnComparator, NegationComparator,
};

pub mod element;
pub use element::{Element, Nested, Placeholder, Truthiness};

mod errors;
pub use errors::{CollectionsError, CollectionsResult};

pub mod list;
pub use list::List;

pub mod map;
pub use map::{HashFunction, Map, ToStringHashFunction};

pub mod priority_queue;
pub use priority_queue::PriorityQueue;

mod value;
pub use value::Value;
