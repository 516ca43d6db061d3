use tracing::trace;

use crate::error;
use crate::item::Item;
use crate::sequence::Sequence;

use super::{each, Block};

pub(crate) fn count(
    entry: &Sequence,
    literal: Option<Item>,
    block: Option<Block<'_>>,
) -> error::Result<usize> {
    // a falsy literal is the same as no literal
    let literal = literal.filter(Item::is_truthy);
    let mut total = 0;
    match (block, literal) {
        (Some(block), _) => {
            trace!(mode = "block", "count");
            each::each(
                entry,
                Some(&mut |item| {
                    if block(item)?.is_truthy() {
                        total += 1;
                    }
                    Ok(Item::Nil)
                }),
            )?;
        }
        (None, Some(literal)) => {
            trace!(mode = "literal", "count");
            each::each(
                entry,
                Some(&mut |item| {
                    if item == &literal {
                        total += 1;
                    }
                    Ok(Item::Nil)
                }),
            )?;
        }
        (None, None) => {
            trace!(mode = "length", "count");
            total = entry.len();
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use crate::{sequence, Enumerable, Item};

    #[test]
    fn test_count_modes() {
        let s = sequence![1, 2, 4, 2];
        assert_eq!(s.count_matches(None, None).unwrap(), 4);
        assert_eq!(s.count_matches(Some(Item::from(2)), None).unwrap(), 2);
        assert_eq!(
            s.count_matches(
                None,
                Some(&mut |item| Ok(Item::from(item.to_integer()? % 2 == 0)))
            )
            .unwrap(),
            3
        );
        assert_eq!(s.count_matches(Some(Item::from(9)), None).unwrap(), 0);
    }

    #[test]
    fn test_block_wins_over_literal() {
        let s = sequence![1, 2, 4, 2];
        let count = s
            .count_matches(Some(Item::from(2)), Some(&mut |_| Ok(Item::from(true))))
            .unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_block_counts_truthy() {
        // any non-nil, non-false result counts
        let s = sequence![1, 2, 3];
        let count = s
            .count_matches(None, Some(&mut |item| Ok(item.clone())))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_falsy_literal_counts_everything() {
        let s = sequence![Item::Nil, 1, false];
        assert_eq!(s.count_matches(Some(Item::Nil), None).unwrap(), 3);
        assert_eq!(s.count_matches(Some(Item::from(false)), None).unwrap(), 3);
    }

    #[test]
    fn test_count_visits_everything() {
        let mut calls = 0;
        sequence![1, 2, 3]
            .count_matches(
                None,
                Some(&mut |_| {
                    calls += 1;
                    Ok(Item::from(true))
                }),
            )
            .unwrap();
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_count_empty_and_range() {
        assert_eq!(sequence![].count_matches(None, None).unwrap(), 0);
        assert_eq!((1_i64..=10).count_matches(Some(Item::from(5)), None).unwrap(), 1);
        assert_eq!((1_i64..=10).count_matches(None, None).unwrap(), 10);
    }
}
