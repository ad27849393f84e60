//! Argument guards.
//!
//! Every guard takes a `label` naming the checked expression; it is echoed in
//! the error message. The `ensure_*` macros fill the label in with the source text
//! of the checked expression:
//!
//! ```rust
//! use ref_kit::ensure_not_whitespace;
//! use ref_kit::ValidationError;
//!
//! fn rename(new_name: Option<&str>) -> Result<String, ValidationError> {
//!     let name = ensure_not_whitespace!(new_name)?;
//!     Ok(name.trim().to_owned())
//! }
//!
//! assert_eq!(rename(Some(" bob ")).unwrap(), "bob");
//! assert_eq!(rename(Some("  ")).unwrap_err().to_string(), "\"new_name\" may not be whitespace only.");
//! ```

use crate::error::ValidationError;

const FALLBACK_EXPRESSION: &str = "specified value";

/// Renders `label` the way a missing-value error names it.
pub(crate) fn missing_expression(label: &str) -> &str {
    if label.trim().is_empty() { FALLBACK_EXPRESSION } else { label }
}

/// Renders `label` the way argument errors quote it.
pub(crate) fn quoted_expression(label: &str) -> String {
    if label.trim().is_empty() {
        FALLBACK_EXPRESSION.to_owned()
    } else if label.starts_with('"') && label.ends_with('"') {
        format!("Literal expression ({label})")
    } else {
        format!("\"{label}\"")
    }
}

#[cold]
#[inline(never)]
fn missing(label: &str) -> ValidationError {
    tracing::debug!(expression = missing_expression(label), "required value is missing");
    ValidationError::Missing { expression: label.to_owned() }
}

#[cold]
#[inline(never)]
fn empty(label: &str) -> ValidationError {
    tracing::debug!(expression = %quoted_expression(label), "value is empty");
    ValidationError::Empty { expression: label.to_owned() }
}

#[cold]
#[inline(never)]
fn whitespace_only(label: &str) -> ValidationError {
    tracing::debug!(expression = %quoted_expression(label), "value is whitespace only");
    ValidationError::WhitespaceOnly { expression: label.to_owned() }
}

/// Fails with [`ValidationError::Missing`] when `value` is absent.
#[inline]
pub fn not_null<T>(value: Option<T>, label: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| missing(label))
}

/// Fails when `value` is absent or has zero length.
#[inline]
pub fn not_null_or_empty<'a>(value: Option<&'a str>, label: &str) -> Result<&'a str, ValidationError> {
    let value = not_null(value, label)?;
    if value.is_empty() {
        return Err(empty(label));
    }
    Ok(value)
}

/// Fails when `value` is absent, empty, or made of whitespace only; the error says which.
#[inline]
pub fn not_null_or_whitespace<'a>(value: Option<&'a str>, label: &str) -> Result<&'a str, ValidationError> {
    let value = not_null_or_empty(value, label)?;
    if value.chars().all(char::is_whitespace) {
        return Err(whitespace_only(label));
    }
    Ok(value)
}

/// [`not_null`] labelled with the checked expression's source text.
#[macro_export]
macro_rules! ensure_not_null {
    ($value:expr) => {
        $crate::validate::not_null($value, ::core::stringify!($value))
    };
}

/// [`not_null_or_empty`] labelled with the checked expression's source text.
#[macro_export]
macro_rules! ensure_not_empty {
    ($value:expr) => {
        $crate::validate::not_null_or_empty($value, ::core::stringify!($value))
    };
}

/// [`not_null_or_whitespace`] labelled with the checked expression's source text.
#[macro_export]
macro_rules! ensure_not_whitespace {
    ($value:expr) => {
        $crate::validate::not_null_or_whitespace($value, ::core::stringify!($value))
    };
}
