use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// The runtime type of an item.
///
/// Kinds form a small single-inheritance hierarchy rooted in
/// [`Kind::Object`]. An item is an instance of a kind if its own kind
/// derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Kind {
    Object,
    Nil,
    Boolean,
    Numeric,
    Integer,
    Float,
    String,
    Array,
    Function,
}

impl Kind {
    /// Look up a kind by its name, as returned by [`Kind::name`].
    pub fn by_name(name: &str) -> Option<Self> {
        Kind::iter().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        use Kind::*;
        match self {
            Object => "Object",
            Nil => "NilClass",
            Boolean => "Boolean",
            Numeric => "Numeric",
            Integer => "Integer",
            Float => "Float",
            String => "String",
            Array => "Array",
            Function => "Proc",
        }
    }

    pub fn parent(&self) -> Option<Kind> {
        use Kind::*;
        match self {
            Object => None,
            Nil => Some(Object),
            Boolean => Some(Object),
            Numeric => Some(Object),
            Integer => Some(Numeric),
            Float => Some(Numeric),
            String => Some(Object),
            Array => Some(Object),
            Function => Some(Object),
        }
    }

    pub fn derives_from(&self, other: Kind) -> bool {
        if self == &other {
            return true;
        }
        match self.parent() {
            Some(parent_kind) => parent_kind.derives_from(other),
            None => false,
        }
    }

    /// The chain of kinds from this kind up to the root, inclusive.
    pub fn ancestors(&self) -> impl Iterator<Item = Kind> {
        std::iter::successors(Some(*self), |kind| kind.parent())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_from() {
        assert!(Kind::Integer.derives_from(Kind::Integer));
        assert!(Kind::Integer.derives_from(Kind::Numeric));
        assert!(Kind::Integer.derives_from(Kind::Object));
        assert!(Kind::Float.derives_from(Kind::Numeric));
        assert!(!Kind::String.derives_from(Kind::Numeric));
        assert!(!Kind::Numeric.derives_from(Kind::Integer));
        assert!(!Kind::Object.derives_from(Kind::Nil));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Kind::by_name("Numeric"), Some(Kind::Numeric));
        assert_eq!(Kind::by_name("Proc"), Some(Kind::Function));
        assert_eq!(Kind::by_name("NilClass"), Some(Kind::Nil));
        assert_eq!(Kind::by_name("numeric"), None);
    }

    #[test]
    fn test_by_name_round_trips_every_kind() {
        for kind in Kind::iter() {
            assert_eq!(Kind::by_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_ancestors() {
        let names = Kind::Integer
            .ancestors()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(" < ");
        insta::assert_snapshot!(names, @"Integer < Numeric < Object");
    }
}
