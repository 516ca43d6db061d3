use std::fmt;

use crate::error;
use crate::sequence::{IndexedItemIter, ItemIter, Sequence, ToOrderedSequence};

use super::{each, map, select, Block, IndexedBlock};

/// The operation an [`Enumerator`] defers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Each,
    Select,
    Map,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Each => "each",
            Method::Select => "select",
            Method::Map => "map",
        }
    }
}

/// A restartable, lazy view of a sequence.
///
/// Produced by operations that were called without a block. Nothing is
/// evaluated until the enumerator is iterated or driven with a block, and
/// every call to [`Enumerator::iter`] starts again from the first item.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumerator {
    source: Sequence,
    method: Method,
}

impl Enumerator {
    pub(crate) fn new(source: Sequence, method: Method) -> Self {
        Self { source, method }
    }

    /// The operation this enumerator defers.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The items this enumerator walks over.
    pub fn source(&self) -> &Sequence {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// A fresh cursor over the source items.
    pub fn iter(&self) -> ItemIter {
        self.source.items()
    }

    /// Run the deferred operation with a block.
    ///
    /// - `each` calls the block for every item and returns the source.
    /// - `select` returns the items the block returned exactly `true` for.
    /// - `map` returns the block's results.
    pub fn with_block(&self, block: Block<'_>) -> error::Result<Sequence> {
        match self.method {
            Method::Each => {
                each::each(&self.source, Some(block))?;
                Ok(self.source.clone())
            }
            Method::Select => Ok(select::select(&self.source, Some(block))?
                .evaluated()
                .unwrap_or_default()),
            Method::Map => Ok(map::map(&self.source, None, Some(block))?
                .evaluated()
                .unwrap_or_default()),
        }
    }
}

impl IntoIterator for &Enumerator {
    type Item = crate::item::Item;
    type IntoIter = ItemIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ToOrderedSequence for Enumerator {
    fn to_ordered_sequence(&self) -> error::Result<Sequence> {
        Ok(self.source.clone())
    }
}

impl fmt::Display for Enumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Enumerator: {}:{}>", self.source, self.method.name())
    }
}

/// A restartable, lazy view of `(index, item)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedEnumerator {
    source: Sequence,
}

impl IndexedEnumerator {
    pub(crate) fn new(source: Sequence) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Sequence {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// A fresh cursor over the pairs.
    pub fn iter(&self) -> IndexedItemIter {
        self.source.indexed_items()
    }

    /// Call the block with every index and item; returns the source.
    pub fn with_block(&self, block: IndexedBlock<'_>) -> error::Result<Sequence> {
        each::each_with_index(&self.source, Some(block))?;
        Ok(self.source.clone())
    }
}

impl IntoIterator for &IndexedEnumerator {
    type Item = (usize, crate::item::Item);
    type IntoIter = IndexedItemIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for IndexedEnumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Enumerator: {}:each_with_index>", self.source)
    }
}
