/// A sequence is an ordered, immutable list of items.
///
/// Sequences share their storage, so cloning one is cheap. No operation ever
/// changes a sequence in place.
mod compare;
mod creation;
mod display;
mod iter;
mod ordered;
mod sequence_core;
mod traits;
mod variant;

pub use iter::{IndexedItemIter, ItemIter, Iter};
pub use ordered::{ToOrderedSequence, MAXIMUM_RANGE_SIZE};
pub use sequence_core::Sequence;
