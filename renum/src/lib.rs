//! Enumerable-style operations over ordered sequences of dynamically typed
//! items.
//!
//! ```
//! use renum::{sequence, Criterion, Enumerable, Item, Kind};
//!
//! let words = sequence!["ant", "bear", "cat"];
//! assert!(words.all_match(Criterion::pattern("a").unwrap(), None).unwrap());
//! assert!(words.any_match(Kind::String.into(), None).unwrap());
//! assert_eq!(words.count_matches(Some(Item::from("cat")), None).unwrap(), 1);
//! ```
mod enumerable;
pub mod error;
mod item;
pub mod sequence;

pub use crate::enumerable::{
    Block, Criterion, Enumerable, Enumerator, FoldBlock, IndexedBlock, IndexedEnumerator, Method,
    Outcome,
};
pub use crate::error::Error;
pub use crate::item::{Function, Item};
pub use crate::sequence::{Sequence, ToOrderedSequence};
pub use renum_kind::Kind;

/// Build a [`Sequence`] from values convertible into [`Item`].
///
/// ```
/// use renum::{sequence, Item};
///
/// let s = sequence![1, "two", 3.0];
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.get(1), Some(&Item::from("two")));
/// assert!(sequence![].is_empty());
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::default()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($crate::Item::from($x)),+])
    };
}
