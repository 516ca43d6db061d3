// not every test file uses every helper
#![allow(dead_code)]

use renum::{error, Enumerable, Function, Item, Sequence};

pub(crate) fn words() -> Sequence {
    renum::sequence!["ant", "bear", "cat"]
}

pub(crate) fn square() -> Function {
    Function::new(|item| {
        let i = item.to_integer()?;
        Ok(Item::from(i * i))
    })
}

pub(crate) fn length_at_least(n: usize) -> impl FnMut(&Item) -> error::Result<Item> {
    move |item| Ok(Item::from(item.to_str()?.len() >= n))
}

/// Evaluate a `select` with a block, failing the test if it was deferred.
pub(crate) fn select<E>(entry: &E, block: renum::Block<'_>) -> error::Result<Sequence>
where
    E: Enumerable + ?Sized,
{
    Ok(entry
        .select(Some(block))?
        .evaluated()
        .expect("select with a block is evaluated"))
}

/// Evaluate a `map_sequence` with a transform, failing the test if it was
/// deferred.
pub(crate) fn map_with<E>(entry: &E, transform: &Function) -> error::Result<Sequence>
where
    E: Enumerable + ?Sized,
{
    let transform = Item::from(transform.clone());
    Ok(entry
        .map_sequence(Some(&transform), None)?
        .evaluated()
        .expect("map with a transform is evaluated"))
}
