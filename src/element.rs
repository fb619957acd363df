/*!
This module contains the capabilities that the collections may require of their elements.

The collections treat elements as opaque values except in a few well defined places:

1. A priority queue refuses elements that represent an absent value ([`Element`])
1. A list fills skipped slots with a placeholder value when inserting past its end ([`Placeholder`])
1. Iteration helpers stop when a callback yields a stopping signal ([`Truthiness`])
1. Flattening descends into elements that are themselves collections ([`Nested`])

Implementations are provided for the primitive types, `String`, `Vec`, `Option` and the dynamic
[`Value`](crate::Value) type. Implementing [`Element`] for your own type is usually a one-liner
since every method has a default.
*/

/**
Trait for types that can be stored in a [`PriorityQueue`](crate::PriorityQueue).

The only requirement is the ability to say whether a value stands for "nothing". Absent values are
rejected on insertion.
*/
pub trait Element {
    /// Returns true if the value represents an absent element e.g. [`None`].
    fn is_absent(&self) -> bool {
        false
    }
}

/**
Trait for types that have a designated value for filling the gaps left when a list is extended
past its end.
*/
pub trait Placeholder {
    /// Returns the value used for skipped slots.
    fn placeholder() -> Self;
}

/**
Trait for values that are checked by the short-circuiting iteration helpers of
[`List`](crate::List) e.g. [`List::each_while`](crate::List::each_while) and
[`List::any`](crate::List::any).

# Stopping signals

Only `false`, null and absent values are stopping signals. In particular `0`, `NaN` and the empty
string do **not** stop iteration.
*/
pub trait Truthiness {
    /// Returns true if iteration should stop when this value is produced.
    fn is_stopping_signal(&self) -> bool;

    /// Returns true if the value lets iteration continue.
    fn is_truthy(&self) -> bool {
        !self.is_stopping_signal()
    }
}

/// Trait for elements that may themselves hold a sequence of elements of the same type.
pub trait Nested: Sized {
    /**
    Returns the items held by this element if it is a collection or `None` if it is a plain
    element.
    */
    fn nested_items(&self) -> Option<&[Self]>;
}

macro_rules! impl_plain_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {}

            impl Truthiness for $ty {
                fn is_stopping_signal(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_plain_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String
);

impl Element for bool {}

impl Truthiness for bool {
    fn is_stopping_signal(&self) -> bool {
        !*self
    }
}

impl Element for &str {}

impl Truthiness for str {
    fn is_stopping_signal(&self) -> bool {
        false
    }
}

impl<T> Element for Vec<T> {}

impl<T> Truthiness for Vec<T> {
    fn is_stopping_signal(&self) -> bool {
        false
    }
}

/// A callback that returns nothing is treated as having returned an absent value.
impl Truthiness for () {
    fn is_stopping_signal(&self) -> bool {
        true
    }
}

impl<T> Element for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> Placeholder for Option<T> {
    fn placeholder() -> Self {
        None
    }
}

impl<T> Truthiness for Option<T>
where
    T: Truthiness,
{
    fn is_stopping_signal(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_stopping_signal(),
        }
    }
}

impl<T> Truthiness for &T
where
    T: Truthiness + ?Sized,
{
    fn is_stopping_signal(&self) -> bool {
        (**self).is_stopping_signal()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn falsy_looking_numbers_and_strings_do_not_stop_iteration() {
        assert_eq!(0_i32.is_stopping_signal(), false);
        assert_eq!(0.0_f64.is_stopping_signal(), false);
        assert_eq!(f64::NAN.is_stopping_signal(), false);
        assert_eq!("".is_stopping_signal(), false);
        assert_eq!(String::new().is_stopping_signal(), false);
        assert_eq!(Vec::<u8>::new().is_stopping_signal(), false);
    }

    #[test]
    fn false_null_and_absent_values_stop_iteration() {
        assert!(false.is_stopping_signal());
        assert!(().is_stopping_signal());
        assert!(None::<i32>.is_stopping_signal());
        assert!(Some(false).is_stopping_signal());
        assert!(!Some(0_i32).is_stopping_signal());
        assert!(true.is_truthy());
    }

    #[test]
    fn only_none_is_an_absent_element() {
        assert!(None::<u8>.is_absent());
        assert!(!Some(0_u8).is_absent());
        assert!(!0_u8.is_absent());
        assert!(!"".is_absent());
        assert_eq!(Option::<u8>::placeholder(), None);
    }
}
