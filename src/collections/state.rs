use crate::error::CursorError;

/// Position bookkeeping shared by the crate's cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum CursorState {
    #[default]
    NotStarted,
    Positioned(usize),
    Exhausted,
    Disposed,
}

impl CursorState {
    /// Steps over a sequence of `len` elements and reports whether an element is now current.
    #[inline]
    pub(crate) fn advance(&mut self, len: usize) -> bool {
        let next = match *self {
            Self::NotStarted => 0,
            Self::Positioned(index) => index + 1,
            Self::Exhausted | Self::Disposed => return false,
        };
        if next < len {
            *self = Self::Positioned(next);
            true
        } else {
            *self = Self::Exhausted;
            false
        }
    }

    #[inline]
    pub(crate) const fn position(self) -> Result<usize, CursorError> {
        match self {
            Self::Positioned(index) => Ok(index),
            Self::NotStarted => Err(CursorError::NotStarted),
            Self::Exhausted => Err(CursorError::Exhausted),
            Self::Disposed => Err(CursorError::Disposed),
        }
    }

    #[inline]
    pub(crate) fn reset(&mut self) -> Result<(), CursorError> {
        if *self == Self::Disposed {
            return Err(CursorError::Disposed);
        }
        *self = Self::NotStarted;
        Ok(())
    }

    /// Moves to `Disposed`; returns `false` if it already was.
    #[inline]
    pub(crate) fn dispose(&mut self) -> bool {
        let first = *self != Self::Disposed;
        *self = Self::Disposed;
        first
    }
}
