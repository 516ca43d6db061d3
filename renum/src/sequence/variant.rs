use std::rc::Rc;

use crate::item::Item;

use super::traits::SequenceCore;

#[derive(Debug, Clone)]
pub struct Empty {}

impl SequenceCore for Empty {
    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn get(&self, _index: usize) -> Option<&Item> {
        None
    }

    #[inline]
    fn is_empty(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct One {
    item: Rc<Item>,
}

impl One {
    pub(crate) fn item(&self) -> &Item {
        &self.item
    }
}

impl From<Item> for One {
    fn from(item: Item) -> Self {
        One {
            item: Rc::new(item),
        }
    }
}

impl SequenceCore for One {
    #[inline]
    fn len(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Item> {
        if index == 0 {
            Some(&self.item)
        } else {
            None
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct Many {
    items: Rc<[Item]>,
}

impl From<Vec<Item>> for Many {
    fn from(items: Vec<Item>) -> Self {
        Many {
            items: items.into(),
        }
    }
}

impl SequenceCore for Many {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }
}
