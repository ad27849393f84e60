use core::ops::Deref;
use core::ops::DerefMut;

use crate::collections::traits::RefIterator;

/// Owns a cursor and disposes it when dropped, including during unwinding.
///
/// Dereferences to the cursor, so it can be driven directly:
///
/// ```rust
/// use ref_kit::RefIterable;
/// use ref_kit::RefIterator;
///
/// let mut names = vec![String::from("ada"), String::from("grace")];
/// {
///     let mut cursor = names.scoped_ref_iter();
///     while let Some(name) = cursor.next_ref() {
///         name.make_ascii_uppercase();
///     }
/// }
/// assert_eq!(names, ["ADA", "GRACE"]);
/// ```
#[derive(Debug)]
pub struct Scoped<I: RefIterator> {
    inner: I,
}

impl<I: RefIterator> Scoped<I> {
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: RefIterator> Deref for Scoped<I> {
    type Target = I;

    #[inline(always)]
    fn deref(&self) -> &I {
        &self.inner
    }
}

impl<I: RefIterator> DerefMut for Scoped<I> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut I {
        &mut self.inner
    }
}

impl<I: RefIterator> Drop for Scoped<I> {
    fn drop(&mut self) {
        self.inner.dispose();
    }
}
