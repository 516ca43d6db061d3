use crate::item::Item;

use super::sequence_core::Sequence;

/// A borrowing iterator over the items of a sequence.
///
/// It walks the sequence by index, front to back.
pub struct Iter<'a> {
    sequence: &'a Sequence,
    index: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(sequence: &'a Sequence) -> Self {
        Self { sequence, index: 0 }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.sequence.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// An owning cursor over the items of a sequence.
///
/// Each cursor starts at the front and advances independently of any other
/// cursor over the same sequence.
#[derive(Debug, Clone)]
pub struct ItemIter {
    sequence: Sequence,
    index: usize,
}

impl ItemIter {
    pub(crate) fn new(sequence: Sequence) -> Self {
        Self { sequence, index: 0 }
    }
}

impl Iterator for ItemIter {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.sequence.get(self.index)?.clone();
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ItemIter {}

/// An owning cursor over `(index, item)` pairs.
#[derive(Debug, Clone)]
pub struct IndexedItemIter {
    sequence: Sequence,
    index: usize,
}

impl IndexedItemIter {
    pub(crate) fn new(sequence: Sequence) -> Self {
        Self { sequence, index: 0 }
    }
}

impl Iterator for IndexedItemIter {
    type Item = (usize, Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.sequence.get(self.index)?.clone();
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IndexedItemIter {}
