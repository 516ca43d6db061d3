//! Enumerable operations.
//!
//! Every operation here is layered on one traversal primitive that visits
//! the items of a sequence in index order. The [`Enumerable`] trait offers
//! them on anything that converts into an ordered sequence, which includes
//! integer ranges.
//!
//! Operations that take an optional block either run it eagerly or, when no
//! block is given, hand back an [`Enumerator`]: a restartable view that can
//! be iterated as often as needed or driven with a block later.
mod count;
mod criterion;
mod each;
mod enumerator;
mod inject;
mod map;
mod quantify;
mod select;

pub use criterion::Criterion;
pub use enumerator::{Enumerator, IndexedEnumerator, Method};

use crate::error;
use crate::item::Item;
use crate::sequence::{Sequence, ToOrderedSequence};

/// A block called with each item.
pub type Block<'a> = &'a mut dyn FnMut(&Item) -> error::Result<Item>;

/// A block called with each index and item.
pub type IndexedBlock<'a> = &'a mut dyn FnMut(usize, &Item) -> error::Result<Item>;

/// A block combining an accumulator with the next item.
pub type FoldBlock<'a> = &'a mut dyn FnMut(Item, &Item) -> error::Result<Item>;

/// The result of an operation that runs a block if one is given, and
/// otherwise defers to an enumerator.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E = Enumerator> {
    /// The block ran and produced this.
    Evaluated(T),
    /// No block was given.
    Deferred(E),
}

impl<T, E> Outcome<T, E> {
    pub fn evaluated(self) -> Option<T> {
        match self {
            Outcome::Evaluated(value) => Some(value),
            Outcome::Deferred(_) => None,
        }
    }

    pub fn deferred(self) -> Option<E> {
        match self {
            Outcome::Evaluated(_) => None,
            Outcome::Deferred(enumerator) => Some(enumerator),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Outcome::Deferred(_))
    }
}

/// Enumerable operations for ordered sequences.
///
/// Each method first materializes `self` with
/// [`ToOrderedSequence::to_ordered_sequence`]; none of them modify `self`.
pub trait Enumerable: ToOrderedSequence {
    /// Call the block once per item, in order.
    ///
    /// Without a block, returns an enumerator over the items.
    fn each(&self, block: Option<Block<'_>>) -> error::Result<Outcome<()>> {
        each::each(&self.to_ordered_sequence()?, block)
    }

    /// Call the block once per item with its index, in order.
    ///
    /// Without a block, returns an enumerator over `(index, item)` pairs.
    fn each_with_index(
        &self,
        block: Option<IndexedBlock<'_>>,
    ) -> error::Result<Outcome<(), IndexedEnumerator>> {
        each::each_with_index(&self.to_ordered_sequence()?, block)
    }

    /// Keep the items for which the block returns exactly `true`.
    ///
    /// Without a block, returns a select enumerator.
    fn select(&self, block: Option<Block<'_>>) -> error::Result<Outcome<Sequence>> {
        select::select(&self.to_ordered_sequence()?, block)
    }

    /// Does every item match?
    ///
    /// With a criterion other than [`Criterion::Absent`] the block is
    /// ignored. With neither, items are tested for truthiness. Always true
    /// for an empty sequence.
    fn all_match(&self, criterion: Criterion, block: Option<Block<'_>>) -> error::Result<bool> {
        quantify::all(&self.to_ordered_sequence()?, &criterion, block)
    }

    /// Does at least one item match?
    ///
    /// Same modes as [`Enumerable::all_match`], except that a pattern is
    /// matched once against all items joined with spaces. Always false for an
    /// empty sequence.
    fn any_match(&self, criterion: Criterion, block: Option<Block<'_>>) -> error::Result<bool> {
        quantify::any(&self.to_ordered_sequence()?, &criterion, block)
    }

    /// Does no item match? The negation of [`Enumerable::any_match`].
    fn none_match(&self, criterion: Criterion, block: Option<Block<'_>>) -> error::Result<bool> {
        quantify::none(&self.to_ordered_sequence()?, &criterion, block)
    }

    /// Count items.
    ///
    /// With a block, counts the items it returns a truthy value for. Else,
    /// with a literal, counts the items equal to it. Else counts all items.
    fn count_matches(
        &self,
        literal: Option<Item>,
        block: Option<Block<'_>>,
    ) -> error::Result<usize> {
        count::count(&self.to_ordered_sequence()?, literal, block)
    }

    /// Transform every item.
    ///
    /// An explicit `transform` takes precedence over the block; it must be
    /// a function item. With neither, returns a map enumerator.
    fn map_sequence(
        &self,
        transform: Option<&Item>,
        block: Option<Block<'_>>,
    ) -> error::Result<Outcome<Sequence>> {
        map::map(&self.to_ordered_sequence()?, transform, block)
    }

    /// Fold the items into one, left to right.
    ///
    /// Without an initial value, the first item is the starting accumulator.
    fn inject(&self, initial: Option<Item>, block: FoldBlock<'_>) -> error::Result<Item> {
        inject::inject(&self.to_ordered_sequence()?, initial, block)
    }
}

impl<T> Enumerable for T where T: ToOrderedSequence + ?Sized {}
