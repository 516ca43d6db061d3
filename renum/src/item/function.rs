use std::fmt;
use std::rc::Rc;

use crate::error;

use super::Item;

type FunctionImpl = dyn Fn(&Item) -> error::Result<Item>;

/// A callable item taking a single argument.
///
/// Functions are compared by identity: two functions are equal only if they
/// share the same underlying closure.
#[derive(Clone)]
pub struct Function(Rc<FunctionImpl>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Item) -> error::Result<Item> + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn call(&self, argument: &Item) -> error::Result<Item> {
        (self.0)(argument)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#<Proc>")
    }
}
