// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Comparators decouple the collections in this crate from the ordering of their elements. Every
structure takes a comparator at construction and never compares elements any other way. This makes
it possible to order by properties different from the natural ordering provided by ordering traits
e.g. [`PartialOrd`].

The following strategies are provided:

1. [`AscendingRelationalComparator`] orders using the relational operators `<` and `>`
1. [`DescendingRelationalComparator`] is the negation of the ascending comparator
1. [`NegationComparator`] reverses the outcome of any other comparator
1. [`CompareToComparator`] delegates to the element's own [`CompareTo`] implementation

Closures of the shape `Fn(&T, &T) -> Ordering` can be used through [`FnComparator`].
*/

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `left` and `right`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `left` > `right`
    1. Returns [`Ordering::Equal`] if `left` == `right`
    1. Returns [`Ordering::Less`] if `left` < `right`

    Implementations must be pure. The collections rely on getting the same answer for the same
    inputs to keep their invariants.
    */
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/**
A capability for elements that carry their own ordering logic.

This is consumed by [`CompareToComparator`].
*/
pub trait CompareTo<Rhs: ?Sized = Self> {
    /**
    Compare `self` (the left hand operand) with `other` (the right hand operand).

    For ascending order this should return [`Ordering::Less`], [`Ordering::Equal`] or
    [`Ordering::Greater`] as `self` is less than, equal to or greater than `other`.
    */
    fn compare_to(&self, other: &Rhs) -> Ordering;
}

/**
Comparator for creating ascending orders.

Values that are neither less than nor greater than each other compare as equal. This includes
values that are incomparable under [`PartialOrd`] e.g. `f64::NAN`.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AscendingRelationalComparator;

impl<T> Comparator<T> for AscendingRelationalComparator
where
    T: PartialOrd + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        if left < right {
            Ordering::Less
        } else if left > right {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Delegates to another comparator to negate its outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NegationComparator<C> {
    /// The comparator whose result is negated.
    delegate_comparator: C,
}

/// Public methods
impl<C> NegationComparator<C> {
    /// Create a new instance of [`NegationComparator`] wrapping `delegate_comparator`.
    pub fn new(delegate_comparator: C) -> Self {
        Self {
            delegate_comparator,
        }
    }

    /// Get a reference to the wrapped comparator.
    pub fn delegate(&self) -> &C {
        &self.delegate_comparator
    }
}

impl<T, C> Comparator<T> for NegationComparator<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.delegate_comparator.compare(left, right).reverse()
    }
}

/// Comparator for creating descending orders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DescendingRelationalComparator {
    delegate_comparator: NegationComparator<AscendingRelationalComparator>,
}

/// Public methods
impl DescendingRelationalComparator {
    /// Create a new instance of [`DescendingRelationalComparator`].
    pub fn new() -> Self {
        Self {
            delegate_comparator: NegationComparator::new(AscendingRelationalComparator),
        }
    }
}

impl<T> Comparator<T> for DescendingRelationalComparator
where
    T: PartialOrd + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.delegate_comparator.compare(left, right)
    }
}

/**
Compares two objects by delegating to [`CompareTo::compare_to`] on the left hand object. The right
hand object is passed as the argument.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompareToComparator;

impl<T> Comparator<T> for CompareToComparator
where
    T: CompareTo + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.compare_to(right)
    }
}

/**
Adapts a closure of the shape `Fn(&T, &T) -> Ordering` into a [`Comparator`].

# Example

```
use std::cmp::Ordering;
use flowpath::{Comparator, FnComparator};

let by_length = FnComparator::new(|left: &&str, right: &&str| left.len().cmp(&right.len()));
assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
```
*/
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    compare_fn: F,
}

/// Public methods
impl<F> FnComparator<F> {
    /// Create a new instance of [`FnComparator`] that calls `compare_fn`.
    pub fn new<T>(compare_fn: F) -> Self
    where
        T: ?Sized,
        F: Fn(&T, &T) -> Ordering,
    {
        Self { compare_fn }
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<T, F> Comparator<T> for FnComparator<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.compare_fn)(left, right)
    }
}

// Shared handles forward to the comparator they point at so that a single comparator can be used
// read-only by many structures.

impl<T, C> Comparator<T> for &C
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

impl<T, C> Comparator<T> for Box<C>
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

impl<T, C> Comparator<T> for Rc<C>
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

impl<T, C> Comparator<T> for Arc<C>
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}
