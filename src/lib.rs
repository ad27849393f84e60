#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::inline_always)]
#![allow(clippy::module_name_repetitions)]

//! Small, allocation-free building blocks:
//!
//! - [`collections`]: by-reference cursors ([`RefIterator`], [`RefIterable`],
//!   [`ReadOnlyRefCollection`]) that edit elements in place.
//! - [`convert`]: type-matching casts and type introspection.
//! - [`unix_time`]: Unix seconds to `chrono` date-times (feature `chrono`).
//! - [`validate`]: argument guards that name the checked expression.
//! - [`TryResult`]: a `(is_success, value)` pair for try-pattern APIs.

pub mod collections;
pub mod convert;
mod error;
mod try_result;
#[cfg(feature = "chrono")]
pub mod unix_time;
pub mod validate;

pub use crate::collections::IndexCursor;
pub use crate::collections::LockedCursor;
pub use crate::collections::ReadOnlyRefCollection;
pub use crate::collections::RefIterable;
pub use crate::collections::RefIterator;
pub use crate::collections::RefStore;
pub use crate::collections::Scoped;
pub use crate::collections::lock_ref_iter;
#[cfg(feature = "parking_lot")]
pub use crate::collections::lock_ref_iter_parking;
pub use crate::convert::RuntimeType;
pub use crate::error::CastError;
pub use crate::error::CursorError;
pub use crate::error::TimeRangeError;
pub use crate::error::ValidationError;
pub use crate::try_result::TryResult;
#[cfg(feature = "chrono")]
pub use crate::unix_time::UnixTimeSeconds;
