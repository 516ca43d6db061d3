use regex::Regex;
use renum_kind::Kind;

use crate::error;
use crate::item::Item;

/// How a quantifier tests an item.
///
/// The criterion is chosen once per call. Anything other than
/// [`Criterion::Absent`] takes precedence over a block.
#[derive(Debug, Clone, Default)]
pub enum Criterion {
    /// No criterion: use the block, or the item's own truthiness.
    #[default]
    Absent,
    /// The item is an instance of the kind.
    Kind(Kind),
    /// The item's text form matches the pattern somewhere.
    Pattern(Regex),
    /// The item equals the literal.
    ///
    /// Built directly, `Literal(Item::Nil)` matches only nil items. Use
    /// [`Criterion::literal`] or `From<Item>` to have nil mean no criterion.
    Literal(Item),
}

impl Criterion {
    /// Compile a pattern criterion.
    pub fn pattern(pattern: &str) -> error::Result<Self> {
        Ok(Criterion::Pattern(Regex::new(pattern)?))
    }

    /// A literal criterion, except that `Nil` gives [`Criterion::Absent`].
    pub fn literal(item: Item) -> Self {
        match item {
            Item::Nil => Criterion::Absent,
            item => Criterion::Literal(item),
        }
    }

    /// Test one item.
    ///
    /// An absent criterion tests the item's truthiness. A pattern fails with
    /// [`error::Error::InvalidArgument`] for items without a text form.
    pub fn matches(&self, item: &Item) -> error::Result<bool> {
        match self {
            Criterion::Absent => Ok(item.is_truthy()),
            Criterion::Kind(kind) => Ok(item.is_a(*kind)),
            Criterion::Pattern(regex) => Ok(regex.is_match(&item.string_value()?)),
            Criterion::Literal(literal) => Ok(item == literal),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Criterion::Absent)
    }

    pub(crate) fn mode(&self) -> &'static str {
        match self {
            Criterion::Absent => "absent",
            Criterion::Kind(_) => "kind",
            Criterion::Pattern(_) => "pattern",
            Criterion::Literal(_) => "literal",
        }
    }
}

impl From<Kind> for Criterion {
    fn from(kind: Kind) -> Self {
        Criterion::Kind(kind)
    }
}

impl From<Regex> for Criterion {
    fn from(regex: Regex) -> Self {
        Criterion::Pattern(regex)
    }
}

/// `Nil` is no criterion at all; any other item is a literal.
impl From<Item> for Criterion {
    fn from(item: Item) -> Self {
        Criterion::literal(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;

    #[test]
    fn test_kind() {
        let numeric = Criterion::from(Kind::Numeric);
        assert!(numeric.matches(&Item::from(1)).unwrap());
        assert!(numeric.matches(&Item::from(1.5)).unwrap());
        assert!(!numeric.matches(&Item::from("1")).unwrap());
        assert!(Criterion::from(Kind::Object)
            .matches(&Item::Nil)
            .unwrap());
    }

    #[test]
    fn test_pattern() {
        let t = Criterion::pattern("t").unwrap();
        assert!(t.matches(&Item::from("cat")).unwrap());
        assert!(!t.matches(&Item::from("bear")).unwrap());
        // numbers are matched by their text form
        assert!(Criterion::pattern(r"^\d+$")
            .unwrap()
            .matches(&Item::from(42))
            .unwrap());
    }

    #[test]
    fn test_pattern_without_text_form() {
        let t = Criterion::pattern("t").unwrap();
        assert!(matches!(
            t.matches(&Item::from(sequence!["t"])),
            Err(error::Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bad_pattern() {
        assert!(matches!(
            Criterion::pattern("("),
            Err(error::Error::Pattern(_))
        ));
    }

    #[test]
    fn test_literal() {
        let three = Criterion::from(Item::from(3));
        assert!(three.matches(&Item::from(3)).unwrap());
        assert!(three.matches(&Item::from(3.0)).unwrap());
        assert!(!three.matches(&Item::from("3")).unwrap());
    }

    #[test]
    fn test_nil_is_absent() {
        let criterion = Criterion::from(Item::Nil);
        assert!(criterion.is_absent());
        assert!(criterion.matches(&Item::from(0)).unwrap());
        assert!(!criterion.matches(&Item::from(false)).unwrap());
        assert!(Criterion::literal(Item::Nil).is_absent());
        assert!(!Criterion::literal(Item::from(0)).is_absent());
    }

    #[test]
    fn test_direct_nil_literal_matches_nil_only() {
        let nil = Criterion::Literal(Item::Nil);
        assert!(!nil.is_absent());
        assert!(nil.matches(&Item::Nil).unwrap());
        assert!(!nil.matches(&Item::from(1)).unwrap());
    }
}
