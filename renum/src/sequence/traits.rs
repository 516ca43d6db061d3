use crate::item::Item;

/// The index primitives every sequence representation provides.
///
/// Traversal is defined purely in terms of these, so a representation only
/// has to know its length and how to look up a position.
pub(crate) trait SequenceCore {
    /// The number of items
    fn len(&self) -> usize;

    /// Get the item at the index, if it exists
    fn get(&self, index: usize) -> Option<&Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
