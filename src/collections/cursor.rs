use std::collections::VecDeque;

use crate::collections::state::CursorState;
use crate::collections::store::RefStore;
use crate::collections::traits::ReadOnlyRefCollection;
use crate::collections::traits::RefIterable;
use crate::collections::traits::RefIterator;
use crate::error::CursorError;

/// Cursor over a mutably borrowed [`RefStore`].
///
/// Holds no resources beyond the borrow, so [`dispose`](RefIterator::dispose)
/// only moves it into the terminal state.
pub struct IndexCursor<'a, S: RefStore + ?Sized> {
    store: &'a mut S,
    state: CursorState,
}

impl<'a, S: RefStore + ?Sized> IndexCursor<'a, S> {
    #[inline]
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            state: CursorState::NotStarted,
        }
    }

    /// Index of the current element, if any.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.state.position().ok()
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.state == CursorState::Disposed
    }
}

impl<S: RefStore + ?Sized> RefIterator for IndexCursor<'_, S> {
    type Item = S::Item;

    #[inline]
    fn move_next(&mut self) -> bool {
        self.state.advance(self.store.slot_count())
    }

    #[inline]
    fn try_current(&mut self) -> Result<&mut S::Item, CursorError> {
        let index = self.state.position()?;
        self.store.slot_mut(index).ok_or(CursorError::Exhausted)
    }

    #[inline]
    fn reset(&mut self) -> Result<(), CursorError> {
        self.state.reset()
    }

    #[inline]
    fn dispose(&mut self) {
        if self.state.dispose() {
            tracing::trace!(len = self.store.slot_count(), "index cursor disposed");
        }
    }
}

impl<S: RefStore + ?Sized> core::fmt::Debug for IndexCursor<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndexCursor")
            .field("len", &self.store.slot_count())
            .field("state", &self.state)
            .finish()
    }
}

macro_rules! impl_ref_collection {
    ($([$($generics:tt)*] $store:ty),* $(,)?) => {
        $(
            impl<$($generics)*> RefIterable for $store {
                type Item = T;
                type Iter<'a>
                    = IndexCursor<'a, Self>
                where
                    Self: 'a;

                #[inline]
                fn ref_iter(&mut self) -> Self::Iter<'_> {
                    IndexCursor::new(self)
                }
            }

            impl<$($generics)*> ReadOnlyRefCollection for $store {
                #[inline]
                fn count(&self) -> usize {
                    RefStore::slot_count(self)
                }
            }
        )*
    };
}

impl_ref_collection!(
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_yields_every_element_in_order() {
        let mut values = vec![3, 1, 4];
        let mut cursor = values.ref_iter();
        let mut seen = Vec::new();
        while cursor.move_next() {
            seen.push(*cursor.current());
        }
        assert_eq!(seen, [3, 1, 4]);
        assert!(!cursor.move_next());
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_current_out_of_sequence_is_reported() {
        let mut values = [1u8, 2];
        let mut cursor = values.ref_iter();
        assert_eq!(cursor.try_current(), Err(CursorError::NotStarted));
        assert!(cursor.move_next());
        assert!(cursor.move_next());
        assert!(!cursor.move_next());
        assert_eq!(cursor.try_current(), Err(CursorError::Exhausted));
        cursor.reset().unwrap();
        assert_eq!(cursor.try_current(), Err(CursorError::NotStarted));
    }

    #[test]
    #[should_panic(expected = "call move_next first")]
    fn test_current_before_move_next_panics() {
        let mut values = vec![String::from("a")];
        let mut cursor = values.ref_iter();
        let _ = cursor.current();
    }

    #[test]
    fn test_writes_through_current_reach_the_deque() {
        let mut queue: VecDeque<i32> = VecDeque::with_capacity(4);
        queue.push_back(2);
        queue.push_back(3);
        queue.push_front(1);
        let mut cursor = queue.ref_iter();
        while let Some(value) = cursor.next_ref() {
            *value = -*value;
        }
        cursor.dispose();
        assert_eq!(queue, [-1, -2, -3]);
    }

    #[test]
    fn test_slice_and_array_counts() {
        let mut array = [0u32; 5];
        assert_eq!(array.count(), 5);
        let slice: &mut [u32] = &mut array[1..];
        assert_eq!(slice.count(), 4);
        assert_eq!(slice.ref_iter().position(), None);
        assert!(Vec::<u8>::new().is_empty());
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut values = vec![1];
        let mut cursor = values.ref_iter();
        assert!(cursor.move_next());
        cursor.dispose();
        cursor.dispose();
        assert!(cursor.is_disposed());
        assert!(!cursor.move_next());
        assert_eq!(cursor.reset(), Err(CursorError::Disposed));
        assert_eq!(cursor.try_current(), Err(CursorError::Disposed));
    }

    #[test]
    fn test_position_tracks_the_cursor() {
        let mut values = vec!['a', 'b'];
        let mut cursor = values.ref_iter();
        assert_eq!(cursor.position(), None);
        cursor.move_next();
        assert_eq!(cursor.position(), Some(0));
        cursor.move_next();
        assert_eq!(cursor.position(), Some(1));
        assert_eq!(format!("{cursor:?}"), "IndexCursor { len: 2, state: Positioned(1) }");
    }
}
