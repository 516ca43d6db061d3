/// Items are the elements of a sequence. An item is a scalar value, a nested
/// sequence, or a callable function.
mod function;
mod item_core;

pub use function::Function;
pub use item_core::Item;
