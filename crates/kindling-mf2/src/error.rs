//! Codec error types

use thiserror::Error;

/// Codec error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input was not a JSON object
    #[error("mf2 value must be a JSON object")]
    NotAnObject,

    /// Document carries no type field
    #[error("document has no type")]
    MissingType,

    /// The type field was present but not usable
    #[error("invalid type field: {0}")]
    InvalidType(String),
}

/// Specialized Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
