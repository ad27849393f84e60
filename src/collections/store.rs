use std::collections::VecDeque;

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for [T] {}
    impl<T, const N: usize> Sealed for [T; N] {}
    impl<T> Sealed for Vec<T> {}
    impl<T> Sealed for std::collections::VecDeque<T> {}
}

/// Indexable backing storage that the crate's cursors walk.
///
/// Sealed: usable as a bound outside the crate, implemented only here.
pub trait RefStore: sealed::Sealed {
    type Item;

    fn slot_count(&self) -> usize;

    fn slot_mut(&mut self, index: usize) -> Option<&mut Self::Item>;
}

impl<T> RefStore for [T] {
    type Item = T;

    #[inline(always)]
    fn slot_count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T, const N: usize> RefStore for [T; N] {
    type Item = T;

    #[inline(always)]
    fn slot_count(&self) -> usize {
        N
    }

    #[inline(always)]
    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T> RefStore for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn slot_count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T> RefStore for VecDeque<T> {
    type Item = T;

    #[inline(always)]
    fn slot_count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}
