//! Type-matching casts and type introspection.
//!
//! A cast succeeds when the concrete type of the value *is* the target type.
//! There are no numeric or structural conversions here; use `From`/`TryFrom` for those.

use core::any::Any;
use core::any::TypeId;
use core::any::type_name;

use crate::error::CastError;
use crate::try_result::TryResult;

/// Moves `value` out as a `D` if `S` and `D` are the same type, otherwise hands it back.
///
/// Does not allocate.
#[inline]
pub fn downcast<S: Any, D: Any>(value: S) -> Result<D, S> {
    let mut slot = Some(value);
    let taken = (&mut slot as &mut dyn Any).downcast_mut::<Option<D>>().and_then(Option::take);
    match (taken, slot) {
        (Some(cast), _) => Ok(cast),
        (None, Some(original)) => Err(original),
        (None, None) => unreachable!("slot is only emptied by a successful downcast"),
    }
}

/// Try-pattern cast. On mismatch the result is a failure carrying `D::default()`.
///
/// An absent source does not match a non-optional target:
///
/// ```rust
/// use ref_kit::convert::try_cast;
///
/// assert!(try_cast::<Option<i32>, Option<i32>>(None).is_success());
/// assert!(!try_cast::<Option<i32>, i32>(None).is_success());
/// ```
#[inline]
pub fn try_cast<S: Any, D: Any + Default>(value: S) -> TryResult<D> {
    match downcast::<S, D>(value) {
        Ok(cast) => TryResult::new(cast),
        Err(_) => TryResult::failure(D::default()),
    }
}

/// Try-pattern cast for a source that may be absent.
///
/// `None` always succeeds as `None`; `Some(value)` succeeds when `value` is a `D`.
#[inline]
pub fn try_cast_nullable<S: Any, D: Any>(value: Option<S>) -> TryResult<Option<D>> {
    match value {
        None => TryResult::new(None),
        Some(value) => match downcast::<S, D>(value) {
            Ok(cast) => TryResult::new(Some(cast)),
            Err(_) => TryResult::failure(None),
        },
    }
}

/// Direct cast: the value as a `D`, or an error naming both types.
pub fn cast<S: Any, D: Any>(value: S) -> Result<D, CastError> {
    downcast::<S, D>(value).map_err(|_| {
        let err = CastError::new::<S, D>();
        tracing::debug!(source = err.source_type, target = err.target_type, "cast rejected");
        err
    })
}

/// Identity and readable name of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuntimeType {
    pub id: TypeId,
    pub name: &'static str,
}

impl RuntimeType {
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl core::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

/// Concrete type of `value`.
///
/// Sized only: a type-erased `&dyn Any` would report `dyn Any` here, so those
/// go through [`type_of_dyn`].
#[inline]
pub fn type_of<T: Any>(_value: &T) -> RuntimeType {
    RuntimeType::of::<T>()
}

/// Concrete type behind a type-erased value, or the declared type `T` when the value is absent.
#[inline]
pub fn type_of_dyn<T: Any + ?Sized>(value: Option<&dyn Any>) -> TypeId {
    value.map_or_else(TypeId::of::<T>, <dyn Any>::type_id)
}
