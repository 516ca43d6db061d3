use std::ops::{Range, RangeInclusive};

use tracing::debug;

use crate::error;
use crate::item::Item;

use super::sequence_core::Sequence;

/// Ranges larger than this are refused rather than materialized.
pub const MAXIMUM_RANGE_SIZE: i64 = 2_i64.pow(25);

/// Conversion into an indexable, ordered sequence.
///
/// This is the single place where anything that is not already a sequence
/// (most notably an integer range) is materialized. Every traversal starts
/// from the result.
pub trait ToOrderedSequence {
    fn to_ordered_sequence(&self) -> error::Result<Sequence>;
}

impl ToOrderedSequence for Sequence {
    fn to_ordered_sequence(&self) -> error::Result<Sequence> {
        Ok(self.clone())
    }
}

impl ToOrderedSequence for [Item] {
    fn to_ordered_sequence(&self) -> error::Result<Sequence> {
        Ok(self.into())
    }
}

impl ToOrderedSequence for Vec<Item> {
    fn to_ordered_sequence(&self) -> error::Result<Sequence> {
        Ok(self.as_slice().into())
    }
}

impl ToOrderedSequence for Range<i64> {
    fn to_ordered_sequence(&self) -> error::Result<Sequence> {
        materialize(self.start, self.end)
    }
}

impl ToOrderedSequence for RangeInclusive<i64> {
    fn to_ordered_sequence(&self) -> error::Result<Sequence> {
        // an exhausted range keeps its bounds but yields nothing
        if self.is_empty() {
            return Ok(Sequence::default());
        }
        // widen so that an end of i64::MAX does not overflow
        let end = i128::from(*self.end()) + 1;
        materialize(*self.start(), end)
    }
}

// start inclusive, end exclusive
fn materialize(start: i64, end: impl Into<i128>) -> error::Result<Sequence> {
    let start = i128::from(start);
    let end = end.into();
    if end <= start {
        return Ok(Sequence::default());
    }
    let length = end - start;
    if length > i128::from(MAXIMUM_RANGE_SIZE) {
        return Err(error::Error::RangeTooLarge(
            u64::try_from(length).unwrap_or(u64::MAX),
        ));
    }
    debug!(start = %start, end = %end, length = %length, "materializing range");
    // both bounds fit in i64 here: start came from one and the length is small
    let items = (start..end)
        .map(|i| Item::Integer(i as i64))
        .collect::<Vec<_>>();
    Ok(items.into())
}
