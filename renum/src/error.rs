use renum_kind::Kind;
use thiserror::Error;

/// Errors raised by sequence operations.
///
/// Every error is returned to the immediate caller; nothing is retried or
/// swallowed. An empty sequence is never an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An argument cannot be used the way the operation needs it.
    ///
    /// Raised for a non-callable value passed as a transform, and for an
    /// element that has no text form when matching against a pattern.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An item was accessed as a kind it is not.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },
    /// A range holds more elements than can be materialized.
    #[error("range of {0} elements is too large to materialize")]
    RangeTooLarge(u64),
    /// A pattern failed to compile.
    #[error("invalid pattern")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
