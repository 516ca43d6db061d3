use std::fmt;

use crate::error;
use crate::item::Item;

use super::sequence_core::Sequence;

impl Sequence {
    /// Join the text forms of all items with a separator.
    ///
    /// Nested sequences are flattened into the join, recursively. Functions
    /// have no text form and make the join fail.
    pub fn join(&self, separator: &str) -> error::Result<String> {
        let mut parts = Vec::with_capacity(self.len());
        self.collect_text(&mut parts)?;
        Ok(parts.join(separator))
    }

    fn collect_text(&self, parts: &mut Vec<String>) -> error::Result<()> {
        for item in self.iter() {
            match item {
                Item::Array(nested) => nested.collect_text(parts)?,
                item => parts.push(item.string_value()?),
            }
        }
        Ok(())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use crate::{error, sequence, Function, Item};

    #[test]
    fn test_join() {
        assert_eq!(
            sequence!["ant", "bear", "cat"].join(" ").unwrap(),
            "ant bear cat"
        );
        assert_eq!(sequence![].join(" ").unwrap(), "");
    }

    #[test]
    fn test_join_flattens() {
        let s = sequence![1, sequence![2, sequence!["x"]], Item::Nil, 3];
        assert_eq!(s.join("-").unwrap(), "1-2-x--3");
    }

    #[test]
    fn test_join_function_fails() {
        let f = Function::new(|item| Ok(item.clone()));
        assert!(matches!(
            sequence![1, f].join(" "),
            Err(error::Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display() {
        insta::assert_snapshot!(sequence![11, 2, 3, 56].to_string(), @"[11, 2, 3, 56]");
        insta::assert_snapshot!(sequence!["a", "b"].to_string(), @r#"["a", "b"]"#);
        insta::assert_snapshot!(sequence![].to_string(), @"[]");
    }
}
