use std::ops::ControlFlow;

use crate::error;
use crate::item::Item;
use crate::sequence::Sequence;

use super::enumerator::{Enumerator, IndexedEnumerator, Method};
use super::{Block, IndexedBlock, Outcome};

/// The traversal primitive.
///
/// Visits the items strictly in index order, `0..len`, passing each index
/// and item. Stops early when `visit` breaks, and at the first error, which
/// is returned.
pub(crate) fn traverse<F>(entry: &Sequence, mut visit: F) -> error::Result<()>
where
    F: FnMut(usize, &Item) -> error::Result<ControlFlow<()>>,
{
    for index in 0..entry.len() {
        let Some(item) = entry.get(index) else {
            break;
        };
        if visit(index, item)?.is_break() {
            break;
        }
    }
    Ok(())
}

pub(crate) fn each(entry: &Sequence, block: Option<Block<'_>>) -> error::Result<Outcome<()>> {
    match block {
        Some(block) => {
            traverse(entry, |_, item| {
                block(item)?;
                Ok(ControlFlow::Continue(()))
            })?;
            Ok(Outcome::Evaluated(()))
        }
        None => Ok(Outcome::Deferred(Enumerator::new(
            entry.clone(),
            Method::Each,
        ))),
    }
}

pub(crate) fn each_with_index(
    entry: &Sequence,
    block: Option<IndexedBlock<'_>>,
) -> error::Result<Outcome<(), IndexedEnumerator>> {
    match block {
        Some(block) => {
            traverse(entry, |index, item| {
                block(index, item)?;
                Ok(ControlFlow::Continue(()))
            })?;
            Ok(Outcome::Evaluated(()))
        }
        None => Ok(Outcome::Deferred(IndexedEnumerator::new(entry.clone()))),
    }
}
