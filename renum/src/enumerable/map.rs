use tracing::trace;

use crate::error;
use crate::item::Item;
use crate::sequence::Sequence;

use super::enumerator::{Enumerator, Method};
use super::{each, Block, Outcome};

pub(crate) fn map(
    entry: &Sequence,
    transform: Option<&Item>,
    block: Option<Block<'_>>,
) -> error::Result<Outcome<Sequence>> {
    let transform = transform.filter(|transform| !transform.is_nil());
    let mut mapped = Vec::with_capacity(entry.len());
    match (transform, block) {
        (Some(transform), _) => {
            trace!(mode = "transform", "map");
            // checked on each call, so an empty sequence never fails
            each::each(
                entry,
                Some(&mut |item| {
                    mapped.push(transform.call(item)?);
                    Ok(Item::Nil)
                }),
            )?;
        }
        (None, Some(block)) => {
            trace!(mode = "block", "map");
            each::each(
                entry,
                Some(&mut |item| {
                    mapped.push(block(item)?);
                    Ok(Item::Nil)
                }),
            )?;
        }
        (None, None) => {
            trace!(mode = "deferred", "map");
            return Ok(Outcome::Deferred(Enumerator::new(
                entry.clone(),
                Method::Map,
            )));
        }
    }
    Ok(Outcome::Evaluated(mapped.into()))
}
