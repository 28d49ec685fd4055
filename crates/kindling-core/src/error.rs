//! Model error types

use thiserror::Error;

/// Error type for constructing domain models from decoded JSON
#[derive(Debug, Error)]
pub enum ModelError {
    /// Input was not a JSON object where one is required
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A document is missing its `type` field
    #[error("document has no type field")]
    MissingType,
}

/// Specialized Result type for model construction
pub type ModelResult<T> = Result<T, ModelError>;

impl ModelError {
    /// Describe a JSON value's shape for error messages
    pub fn shape_of(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        }
    }
}
