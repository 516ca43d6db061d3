// Sequence dispatches to its variants by hand rather than through a trait
// object; each variant only has to supply the index primitives.

use crate::item::Item;

use super::{
    iter::{IndexedItemIter, ItemIter, Iter},
    traits::SequenceCore,
    variant::{Empty, Many, One},
};

#[derive(Debug, Clone)]
pub enum Sequence {
    Empty(Empty),
    One(One),
    Many(Many),
}

// a static assertion to ensure that Sequence stays three words at most
#[cfg(target_arch = "x86_64")]
static_assertions::const_assert!(std::mem::size_of::<Sequence>() <= 24);

impl Default for Sequence {
    fn default() -> Self {
        Self::Empty(Empty {})
    }
}

impl Sequence {
    /// Check whether the sequence is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Sequence::Empty(inner) => inner.is_empty(),
            Sequence::One(inner) => inner.is_empty(),
            Sequence::Many(inner) => inner.is_empty(),
        }
    }

    /// The number of items in the sequence
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Sequence::Empty(inner) => inner.len(),
            Sequence::One(inner) => inner.len(),
            Sequence::Many(inner) => inner.len(),
        }
    }

    /// Get the item at the index, if it exists
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Item> {
        match self {
            Sequence::Empty(inner) => inner.get(index),
            Sequence::One(inner) => inner.get(index),
            Sequence::Many(inner) => inner.get(index),
        }
    }

    /// Borrowing iterator over the items, in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Owning iterator over the items. It holds its own handle on the
    /// storage, so it outlives the borrow it was created from.
    pub fn items(&self) -> ItemIter {
        ItemIter::new(self.clone())
    }

    /// Owning iterator over `(index, item)` pairs.
    pub fn indexed_items(&self) -> IndexedItemIter {
        IndexedItemIter::new(self.clone())
    }

    /// Get the single item of a one-item sequence.
    pub fn single(&self) -> Option<&Item> {
        match self {
            Sequence::One(inner) => Some(inner.item()),
            _ => None,
        }
    }

    /// Copy the items out into a vector.
    pub fn to_vec(&self) -> Vec<Item> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
