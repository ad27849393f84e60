/// Outcome of a try-pattern operation: a success flag paired with a value.
///
/// Anyone can wrap a value as a success. Failures are only produced inside
/// this crate, so a failed result never carries a payload fabricated by the caller;
/// its value is whatever the producing operation documents (usually `Default`).
///
/// ```rust
/// use ref_kit::TryResult;
///
/// let parsed = TryResult::new(42);
/// assert!(parsed.is_success());
///
/// let (ok, value) = parsed.into_parts();
/// assert!(ok);
/// assert_eq!(value, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct TryResult<T> {
    is_success: bool,
    result: T,
}

impl<T> TryResult<T> {
    /// A successful result carrying `result`.
    #[inline]
    pub const fn new(result: T) -> Self {
        Self { is_success: true, result }
    }

    #[inline]
    pub(crate) const fn failure(result: T) -> Self {
        Self { is_success: false, result }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// The carried value, regardless of the outcome.
    #[inline]
    pub const fn result(&self) -> &T {
        &self.result
    }

    /// `(is_success, result)`, for `let (ok, value) = ...` destructuring.
    #[inline]
    pub fn into_parts(self) -> (bool, T) {
        (self.is_success, self.result)
    }

    /// The value on success, `None` on failure.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.is_success.then_some(self.result)
    }

    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> TryResult<U> {
        TryResult {
            is_success: self.is_success,
            result: f(self.result),
        }
    }
}

impl<T> From<T> for TryResult<T> {
    #[inline]
    fn from(result: T) -> Self {
        Self::new(result)
    }
}

impl<T> From<TryResult<T>> for bool {
    #[inline]
    fn from(value: TryResult<T>) -> Self {
        value.is_success
    }
}

impl<T> From<TryResult<T>> for (bool, T) {
    #[inline]
    fn from(value: TryResult<T>) -> Self {
        value.into_parts()
    }
}
