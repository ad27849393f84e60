use thiserror::Error;

use crate::validate::missing_expression;
use crate::validate::quoted_expression;

/// Contract violations reported by a [`RefIterator`](crate::RefIterator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cursor is positioned before the first element; call move_next first")]
    NotStarted,
    #[error("cursor has moved past the last element")]
    Exhausted,
    #[error("cursor has been disposed")]
    Disposed,
    #[error("cursor cannot be rewound")]
    ResetUnsupported,
    #[error("lock guarding the collection is poisoned")]
    Poisoned,
}

/// Returned by [`cast`](crate::convert::cast) when the concrete type does not match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot cast value of type \"{source_type}\" to type \"{target_type}\".")]
pub struct CastError {
    pub source_type: &'static str,
    pub target_type: &'static str,
}

impl CastError {
    #[inline]
    pub fn new<S: ?Sized, D: ?Sized>() -> Self {
        Self {
            source_type: core::any::type_name::<S>(),
            target_type: core::any::type_name::<D>(),
        }
    }
}

/// Rejected argument.
///
/// Every variant stores the label exactly as the caller passed it; the message
/// applies the fallback for blank labels and the quoting of argument errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Value cannot be null. (Parameter '{}')", missing_expression(.expression))]
    Missing { expression: String },
    #[error("{} may not be empty.", quoted_expression(.expression))]
    Empty { expression: String },
    #[error("{} may not be whitespace only.", quoted_expression(.expression))]
    WhitespaceOnly { expression: String },
}

impl ValidationError {
    /// The label of the checked expression, as passed to the guard.
    pub fn expression(&self) -> &str {
        match self {
            Self::Missing { expression } | Self::Empty { expression } | Self::WhitespaceOnly { expression } => expression,
        }
    }
}

/// A Unix timestamp or date-time outside of years 1 through 9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Valid values are between {min} and {max} seconds, inclusive (got {value}).")]
pub struct TimeRangeError {
    pub value: i64,
    pub min: i64,
    pub max: i64,
}
