use std::ops::ControlFlow;

use tracing::trace;

use crate::error;
use crate::item::Item;
use crate::sequence::Sequence;

use super::each::traverse;
use super::FoldBlock;

pub(crate) fn inject(
    entry: &Sequence,
    initial: Option<Item>,
    block: FoldBlock<'_>,
) -> error::Result<Item> {
    trace!(seeded = initial.is_some(), len = entry.len(), "inject");
    let mut accumulator = initial;
    traverse(entry, |_, item| {
        let next = match accumulator.take() {
            Some(current) => block(current, item)?,
            None => item.clone(),
        };
        accumulator = Some(next);
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(accumulator.unwrap_or(Item::Nil))
}

#[cfg(test)]
mod tests {
    use crate::{error, sequence, Enumerable, Item};

    fn sum(accumulator: Item, item: &Item) -> error::Result<Item> {
        Ok(Item::from(accumulator.to_integer()? + item.to_integer()?))
    }

    #[test]
    fn test_inject_without_initial() {
        assert_eq!(sequence![1, 2, 3, 4].inject(None, &mut sum).unwrap(), Item::from(10));
    }

    #[test]
    fn test_inject_with_initial() {
        assert_eq!(
            sequence![1, 2, 3].inject(Some(Item::from(100)), &mut sum).unwrap(),
            Item::from(106)
        );
    }

    #[test]
    fn test_inject_empty() {
        assert_eq!(sequence![].inject(None, &mut sum).unwrap(), Item::Nil);
        assert_eq!(
            sequence![].inject(Some(Item::from(7)), &mut sum).unwrap(),
            Item::from(7)
        );
    }

    #[test]
    fn test_inject_single_item_skips_block() {
        let mut calls = 0;
        let result = sequence!["only"]
            .inject(None, &mut |accumulator, _| {
                calls += 1;
                Ok(accumulator)
            })
            .unwrap();
        assert_eq!(result, Item::from("only"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_inject_order() {
        let joined = sequence!["a", "b", "c"]
            .inject(Some(Item::from(">")), &mut |accumulator, item| {
                Ok(Item::from(format!("{}{}", accumulator.to_str()?, item.to_str()?)))
            })
            .unwrap();
        assert_eq!(joined, Item::from(">abc"));
    }

    #[test]
    fn test_inject_range() {
        assert_eq!((1_i64..=100).inject(None, &mut sum).unwrap(), Item::from(5050));
    }

    #[test]
    fn test_inject_error() {
        assert!(matches!(
            sequence![1, "x"].inject(None, &mut sum),
            Err(error::Error::TypeMismatch { .. })
        ));
    }
}
