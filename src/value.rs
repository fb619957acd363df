/*!
This module provides [`Value`], a dynamically typed element for collections that hold heterogeneous
or nested content.

A list of [`Value`]s can hold numbers next to strings, fill gaps with [`Value::Null`] and contain
arrays or other lists that [`List::flatten`](crate::List::flatten) will descend into.
*/

use std::cmp::Ordering;
use std::fmt;

use crate::element::{Element, Nested, Placeholder, Truthiness};
use crate::list::List;

/// Whole numbers below this magnitude are exactly representable as both `f64` and `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A dynamically typed element.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absence of a value. Used as the placeholder for skipped list slots.
    Null,

    /// A boolean.
    Bool(bool),

    /// A number. Integers are stored as floating point numbers.
    Number(f64),

    /// A string.
    Text(String),

    /// A plain ordered collection of values.
    Array(Vec<Value>),

    /// A nested list of values.
    List(List<Value>),
}

/// Public methods
impl Value {
    /// Returns true if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the number held by this value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string held by this value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Private methods
impl Value {
    /// The position of this value's kind in the cross-kind ordering.
    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::Text(_) => 3,
            Value::Array(_) => 4,
            Value::List(_) => 5,
        }
    }
}

/**
Values of the same kind are ordered naturally. Arrays and lists are ordered lexicographically by
their elements.

Values of different kinds are ordered by kind: null, booleans, numbers, strings, arrays and
finally lists. A null value is therefore only ever equal to another null value.
*/
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(left), Value::Bool(right)) => left.partial_cmp(right),
            (Value::Number(left), Value::Number(right)) => left.partial_cmp(right),
            (Value::Text(left), Value::Text(right)) => left.partial_cmp(right),
            (Value::Array(left), Value::Array(right)) => left.partial_cmp(right),
            (Value::List(left), Value::List(right)) => left.raw().partial_cmp(right.raw()),
            _ => Some(self.kind_rank().cmp(&other.kind_rank())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(boolean) => write!(f, "{}", boolean),
            Value::Number(number) => {
                if number.fract() == 0.0 && number.abs() < MAX_EXACT_INTEGER {
                    // Whole numbers render without a fractional part e.g. `5` instead of `5.0`
                    write!(f, "{}", *number as i64)
                } else {
                    write!(f, "{}", number)
                }
            }
            Value::Text(text) => write!(f, "{}", text),
            Value::Array(items) => write_joined(f, items),
            Value::List(list) => write_joined(f, list.raw()),
        }
    }
}

/// Write the items separated by commas.
fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", item)?;
    }

    Ok(())
}

impl Element for Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl Placeholder for Value {
    fn placeholder() -> Self {
        Value::Null
    }
}

impl Truthiness for Value {
    fn is_stopping_signal(&self) -> bool {
        matches!(self, Value::Null | Value::Bool(false))
    }
}

impl Nested for Value {
    fn nested_items(&self) -> Option<&[Self]> {
        match self {
            Value::Array(items) => Some(items),
            Value::List(list) => Some(list.raw()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Value::Bool(boolean)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Value::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<List<Value>> for Value {
    fn from(list: List<Value>) -> Self {
        Value::List(list)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(maybe_value: Option<T>) -> Self {
        match maybe_value {
            None => Value::Null,
            Some(value) => value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn values_of_the_same_kind_are_ordered() {
        assert!(Value::from(1) < Value::from(2));
        assert!(Value::from("a") < Value::from("b"));
        assert!(Value::from(false) < Value::from(true));
        assert!(Value::from(vec![1.into(), 2.into()]) < Value::from(vec![1.into(), 3.into()]));
    }

    #[test]
    fn values_of_different_kinds_are_ordered_by_kind() {
        assert_eq!(
            Value::from(1).partial_cmp(&Value::from("1")),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Null.partial_cmp(&Value::from(0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from(4).partial_cmp(&Value::Null),
            Some(Ordering::Greater)
        );
        assert!(Value::from(true) < Value::from(-10));
        assert!(Value::from("z") < Value::Array(vec![]));
        assert!(Value::Array(vec![]) < Value::from(List::new()));
    }

    #[test]
    fn whole_numbers_render_without_a_fraction() {
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(
            Value::from(vec![1.into(), "a".into(), Value::Null]).to_string(),
            "1,a,null"
        );
    }

    #[test]
    fn large_whole_numbers_render_distinctly() {
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Value::from(-1e20).to_string(), "-100000000000000000000");
        assert_eq!(
            Value::from(9_007_199_254_740_991.0).to_string(),
            "9007199254740991"
        );
        assert_eq!(Value::from(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn only_null_and_false_are_stopping_signals() {
        assert!(Value::Null.is_stopping_signal());
        assert!(Value::from(false).is_stopping_signal());
        assert!(!Value::from(0).is_stopping_signal());
        assert!(!Value::from(f64::NAN).is_stopping_signal());
        assert!(!Value::from("").is_stopping_signal());
        assert!(!Value::Array(vec![]).is_stopping_signal());
    }

    #[test]
    fn arrays_and_lists_expose_nested_items() {
        let array = Value::from(vec![1.into(), 2.into()]);
        assert_eq!(array.nested_items().map(|items| items.len()), Some(2));

        let list = Value::from(List::from_items(vec![Value::from(3)]));
        assert_eq!(list.nested_items(), Some(&[Value::from(3)][..]));

        assert_eq!(Value::from(3).nested_items(), None);
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }
}
