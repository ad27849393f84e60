use core::ops::DerefMut;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::collections::state::CursorState;
use crate::collections::store::RefStore;
use crate::collections::traits::RefIterator;
use crate::error::CursorError;

/// Cursor that keeps a lock guard over its store for the whole iteration.
///
/// [`dispose`](RefIterator::dispose) drops the guard and releases the lock; after
/// that the cursor is terminal. Drive it through [`Scoped`](crate::Scoped) to make
/// the release unconditional.
pub struct LockedCursor<G> {
    guard: Option<G>,
    state: CursorState,
}

impl<G> LockedCursor<G>
where
    G: DerefMut,
    G::Target: RefStore,
{
    #[inline]
    pub fn new(guard: G) -> Self {
        Self {
            guard: Some(guard),
            state: CursorState::NotStarted,
        }
    }

    /// Whether the cursor still holds the lock.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.guard.is_some()
    }
}

impl<G> RefIterator for LockedCursor<G>
where
    G: DerefMut,
    G::Target: RefStore,
{
    type Item = <G::Target as RefStore>::Item;

    #[inline]
    fn move_next(&mut self) -> bool {
        match &self.guard {
            Some(guard) => self.state.advance(guard.slot_count()),
            None => false,
        }
    }

    #[inline]
    fn try_current(&mut self) -> Result<&mut Self::Item, CursorError> {
        let index = self.state.position()?;
        let guard = self.guard.as_mut().ok_or(CursorError::Disposed)?;
        guard.slot_mut(index).ok_or(CursorError::Exhausted)
    }

    #[inline]
    fn reset(&mut self) -> Result<(), CursorError> {
        self.state.reset()
    }

    fn dispose(&mut self) {
        self.state.dispose();
        if self.guard.take().is_some() {
            tracing::trace!("locked cursor released its lock");
        }
    }
}

impl<G> core::fmt::Debug for LockedCursor<G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LockedCursor")
            .field("locked", &self.guard.is_some())
            .field("state", &self.state)
            .finish()
    }
}

/// Locks `mutex` and returns a cursor over its contents that holds the lock until disposed.
pub fn lock_ref_iter<S>(mutex: &Mutex<S>) -> Result<LockedCursor<MutexGuard<'_, S>>, CursorError>
where
    S: RefStore + ?Sized,
{
    let guard = mutex.lock().map_err(|_| {
        tracing::debug!("refusing to iterate over a poisoned mutex");
        CursorError::Poisoned
    })?;
    Ok(LockedCursor::new(guard))
}

/// [`lock_ref_iter`] for `parking_lot` mutexes, which cannot be poisoned.
#[cfg(feature = "parking_lot")]
pub fn lock_ref_iter_parking<S>(mutex: &parking_lot::Mutex<S>) -> LockedCursor<parking_lot::MutexGuard<'_, S>>
where
    S: RefStore + ?Sized,
{
    LockedCursor::new(mutex.lock())
}
