//! By-reference iteration.
//!
//! [`RefIterable::ref_iter`] hands out a [`RefIterator`], a cursor whose
//! [`current`](RefIterator::current) is a `&mut` into the collection itself.
//! Elements are edited in place, never copied, and the cursor can be rewound.
//!
//! Release of cursor resources is the job of the consuming construct:
//! [`Scoped`], [`RefIterable::for_each_ref`] and [`RefIterable::try_for_each_ref`]
//! dispose on every exit path.

mod cursor;
mod lock;
mod scope;
mod state;
mod store;
mod traits;

pub use cursor::IndexCursor;
pub use lock::LockedCursor;
pub use lock::lock_ref_iter;
#[cfg(feature = "parking_lot")]
pub use lock::lock_ref_iter_parking;
pub use scope::Scoped;
pub use store::RefStore;
pub use traits::ReadOnlyRefCollection;
pub use traits::RefIterable;
pub use traits::RefIterator;
