use tracing::trace;

use crate::error;
use crate::item::Item;
use crate::sequence::Sequence;

use super::enumerator::{Enumerator, Method};
use super::{each, Block, Outcome};

pub(crate) fn select(entry: &Sequence, block: Option<Block<'_>>) -> error::Result<Outcome<Sequence>> {
    let Some(block) = block else {
        trace!(len = entry.len(), "select: deferred");
        return Ok(Outcome::Deferred(Enumerator::new(
            entry.clone(),
            Method::Select,
        )));
    };
    trace!(len = entry.len(), "select: block");
    let mut kept: Vec<Item> = Vec::new();
    each::each(
        entry,
        Some(&mut |item| {
            // only an exact `true` keeps the item
            if block(item)?.is_true() {
                kept.push(item.clone());
            }
            Ok(Item::Nil)
        }),
    )?;
    Ok(Outcome::Evaluated(kept.into()))
}
