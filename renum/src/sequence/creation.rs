use crate::item::Item;

use super::{
    sequence_core::Sequence,
    variant::{Empty, One},
};

impl Sequence {
    pub fn new(items: Vec<Item>) -> Self {
        match items.len() {
            0 => Self::Empty(Empty {}),
            1 => match items.into_iter().next() {
                Some(item) => Self::One(item.into()),
                None => Self::Empty(Empty {}),
            },
            _ => Self::Many(items.into()),
        }
    }

    /// Concatenate two sequences producing a new sequence.
    pub fn concat(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Empty(_), other) => other.clone(),
            (this, Self::Empty(_)) => this.clone(),
            (this, other) => {
                let mut items = Vec::with_capacity(this.len() + other.len());
                items.extend(this.iter().cloned());
                items.extend(other.iter().cloned());
                Self::new(items)
            }
        }
    }
}

impl From<Vec<Item>> for Sequence {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl From<&[Item]> for Sequence {
    fn from(items: &[Item]) -> Self {
        Self::new(items.to_vec())
    }
}

impl From<Item> for Sequence {
    fn from(item: Item) -> Self {
        Self::One(One::from(item))
    }
}

impl FromIterator<Item> for Sequence {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;

    #[test]
    fn test_concat() {
        let a = sequence![1, 2];
        let b = sequence!["c"];
        assert_eq!(a.concat(&b), sequence![1, 2, "c"]);
        assert_eq!(a.concat(&sequence![]), a);
        assert_eq!(sequence![].concat(&b), b);
    }

    #[test]
    fn test_from_iterator() {
        let s: Sequence = (1_i64..=3).map(Item::from).collect();
        assert_eq!(s, sequence![1, 2, 3]);
    }
}
