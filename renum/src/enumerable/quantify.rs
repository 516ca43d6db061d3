use std::ops::ControlFlow;

use tracing::trace;

use crate::error;
use crate::item::Item;
use crate::sequence::Sequence;

use super::criterion::Criterion;
use super::each::traverse;
use super::Block;

pub(crate) fn all(
    entry: &Sequence,
    criterion: &Criterion,
    block: Option<Block<'_>>,
) -> error::Result<bool> {
    trace!(mode = mode(criterion, &block), len = entry.len(), "all");
    if entry.is_empty() {
        return Ok(true);
    }
    Ok(find(entry, criterion, block, false)?.is_none())
}

pub(crate) fn any(
    entry: &Sequence,
    criterion: &Criterion,
    block: Option<Block<'_>>,
) -> error::Result<bool> {
    trace!(mode = mode(criterion, &block), len = entry.len(), "any");
    if entry.is_empty() {
        return Ok(false);
    }
    if let Criterion::Pattern(regex) = criterion {
        // the pattern sees all items at once, joined by single spaces
        return Ok(regex.is_match(&entry.join(" ")?));
    }
    Ok(find(entry, criterion, block, true)?.is_some())
}

pub(crate) fn none(
    entry: &Sequence,
    criterion: &Criterion,
    block: Option<Block<'_>>,
) -> error::Result<bool> {
    Ok(!any(entry, criterion, block)?)
}

// Index of the first item whose test comes out as `wanted`. Stops there.
fn find(
    entry: &Sequence,
    criterion: &Criterion,
    mut block: Option<Block<'_>>,
    wanted: bool,
) -> error::Result<Option<usize>> {
    let mut found = None;
    traverse(entry, |index, item| {
        if test(criterion, &mut block, item)? == wanted {
            found = Some(index);
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    })?;
    Ok(found)
}

fn test(criterion: &Criterion, block: &mut Option<Block<'_>>, item: &Item) -> error::Result<bool> {
    match (criterion, block) {
        (Criterion::Absent, Some(block)) => Ok((*block)(item)?.is_truthy()),
        (criterion, _) => criterion.matches(item),
    }
}

fn mode(criterion: &Criterion, block: &Option<Block<'_>>) -> &'static str {
    match (criterion, block) {
        (Criterion::Absent, Some(_)) => "block",
        (Criterion::Absent, None) => "truthiness",
        (criterion, _) => criterion.mode(),
    }
}
