//! Initialization error types
//!
//! [`InitError`] covers every way [`crate::search::engine::initialize`] can
//! reject its inputs. All variants are non-fatal: the caller reports the
//! message and lets the user try again.
//!
//! There is no error type for stepping. A `step` call on a concluded (or
//! missing) search is an informational condition, not a failure; see
//! [`crate::search::engine::StepOutcome`] and the session boundary.

use crate::parse::ParseError;
use std::fmt;

/// Validation failure while setting up a new search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// A token in the array text is not a valid integer.
    InvalidArray(ParseError),

    /// The array parsed to zero elements.
    EmptyArray,

    /// The parsed array is not in ascending order.
    UnsortedArray,

    /// The target text is not a valid integer.
    InvalidTarget(ParseError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::InvalidArray(e) => {
                write!(f, "Invalid array: {}", e)
            }
            InitError::EmptyArray => {
                write!(f, "Array must contain at least one element")
            }
            InitError::UnsortedArray => {
                write!(f, "Array must be sorted in ascending order")
            }
            InitError::InvalidTarget(e) => {
                write!(f, "Invalid target: {}", e)
            }
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::InvalidArray(e) | InitError::InvalidTarget(e) => Some(e),
            InitError::EmptyArray | InitError::UnsortedArray => None,
        }
    }
}
