//! Type tags for dynamically typed sequence items.
mod kind;

pub use kind::Kind;
