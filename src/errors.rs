/*!
This module contains the error types returned by the collections in this crate.

Errors are only raised for invalid requests. Expected absences, such as polling an empty queue or
looking up an index past the end of a list, are reported with [`Option::None`] instead.
*/

use std::fmt;

/// Result that wraps [`CollectionsError`].
pub type CollectionsResult<T> = Result<T, CollectionsError>;

/// Errors raised by collection operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CollectionsError {
    /// Variant for attempts to add an absent element (e.g. `None`) to a priority queue.
    AbsentElement,

    /**
    Variant for insertions at an index that lies before the start of a list.

    The values are the offending index and the smallest index that is allowed.
    */
    IndexBelowMinimum {
        /// The index that was requested.
        index: isize,
        /// The minimum index allowed i.e. the negated size of the list.
        min: isize,
    },

    /// Variant for accesses to an index that does not refer to an existing element of a list.
    IndexOutOfRange {
        /// The index that was requested.
        index: isize,
        /// The minimum index allowed i.e. the negated size of the list.
        min: isize,
        /// The maximum index allowed i.e. the size of the list minus one.
        max: isize,
    },
}

impl std::error::Error for CollectionsError {}

impl fmt::Display for CollectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionsError::AbsentElement => {
                write!(f, "Cannot add null or absent items to a priority queue")
            }
            CollectionsError::IndexBelowMinimum { index, min } => {
                write!(
                    f,
                    "Index {} is out of range. The minimum index allowed is {}",
                    index, min
                )
            }
            CollectionsError::IndexOutOfRange { index, min, max } => {
                write!(
                    f,
                    "Index {} is out of range. The index must be within [{}, {}]",
                    index, min, max
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_messages_report_the_offending_index_and_bounds() {
        assert_eq!(
            CollectionsError::IndexBelowMinimum { index: -5, min: -3 }.to_string(),
            "Index -5 is out of range. The minimum index allowed is -3"
        );
        assert_eq!(
            CollectionsError::IndexOutOfRange {
                index: 4,
                min: -3,
                max: 2
            }
            .to_string(),
            "Index 4 is out of range. The index must be within [-3, 2]"
        );
    }
}
