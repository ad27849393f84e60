use crate::collections::scope::Scoped;
use crate::error::CursorError;

/// A cursor that hands out `&mut` access to the element it is positioned on.
///
/// Unlike [`Iterator`], the cursor keeps ownership of the borrow: every
/// reference returned by [`current`](RefIterator::current) is tied to `&mut self`,
/// so the cursor can be rewound with [`reset`](RefIterator::reset) and walked
/// again over the same, possibly mutated, elements.
///
/// States are `NotStarted -> Positioned(i) -> Exhausted`, with `reset` going back
/// to `NotStarted` and `dispose` leading to the terminal `Disposed` state.
pub trait RefIterator {
    type Item;

    /// Moves to the next element. Returns `false` once the sequence is exhausted,
    /// and keeps returning `false` afterwards. A disposed cursor always returns `false`.
    fn move_next(&mut self) -> bool;

    /// The element under the cursor, or the reason there is none.
    fn try_current(&mut self) -> Result<&mut Self::Item, CursorError>;

    /// Rewinds to the position before the first element.
    ///
    /// Cursors that cannot rewind return [`CursorError::ResetUnsupported`];
    /// disposed cursors return [`CursorError::Disposed`].
    fn reset(&mut self) -> Result<(), CursorError>;

    /// Releases whatever the cursor holds for the duration of iteration.
    /// Calling it more than once has no further effect.
    fn dispose(&mut self);

    /// The element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if no element is current: before the first successful
    /// [`move_next`](RefIterator::move_next), after exhaustion, after a reset, or after disposal.
    #[inline]
    #[track_caller]
    fn current(&mut self) -> &mut Self::Item {
        match self.try_current() {
            Ok(item) => item,
            Err(err) => panic!("RefIterator::current: {err}"),
        }
    }

    /// Advances and returns the new current element, for `while let` loops.
    #[inline]
    fn next_ref(&mut self) -> Option<&mut Self::Item> {
        if self.move_next() { self.try_current().ok() } else { None }
    }
}

/// An aggregate that can be walked by reference.
///
/// ```rust
/// use ref_kit::RefIterable;
/// use ref_kit::RefIterator;
///
/// let mut readings = vec![1, 2, 3];
/// let mut cursor = readings.ref_iter();
/// while let Some(value) = cursor.next_ref() {
///     *value *= 10;
/// }
/// cursor.dispose();
/// assert_eq!(readings, [10, 20, 30]);
/// ```
pub trait RefIterable {
    type Item;
    type Iter<'a>: RefIterator<Item = Self::Item>
    where
        Self: 'a;

    /// A fresh cursor positioned before the first element.
    fn ref_iter(&mut self) -> Self::Iter<'_>;

    /// A fresh cursor that is disposed when the returned guard is dropped.
    #[inline]
    fn scoped_ref_iter(&mut self) -> Scoped<Self::Iter<'_>> {
        Scoped::new(self.ref_iter())
    }

    /// Visits every element by reference. The cursor is disposed on every exit path,
    /// including unwinding out of `f`.
    #[inline]
    fn for_each_ref<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Self::Item),
    {
        let mut cursor = self.scoped_ref_iter();
        while let Some(item) = cursor.next_ref() {
            f(item);
        }
    }

    /// Like [`for_each_ref`](RefIterable::for_each_ref), stopping at the first error.
    #[inline]
    fn try_for_each_ref<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&mut Self::Item) -> Result<(), E>,
    {
        let mut cursor = self.scoped_ref_iter();
        while let Some(item) = cursor.next_ref() {
            f(item)?;
        }
        Ok(())
    }
}

/// A [`RefIterable`] that knows its length without being iterated.
pub trait ReadOnlyRefCollection: RefIterable {
    fn count(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
