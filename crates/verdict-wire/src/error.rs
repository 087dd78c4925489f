//! Wire parse error types

use thiserror::Error;

/// Parse error
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed JSON text
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Top-level document is not an array
    #[error("Condition list must be a JSON array, got {found}")]
    NotAnArray { found: String },

    /// Node is neither a leaf object nor a group object
    #[error("Invalid condition node: {0}")]
    InvalidNode(String),

    /// Group node whose `conditions` is not an array
    #[error("Group 'conditions' must be an array, got {found}")]
    InvalidGroup { found: String },

    /// Group node with no children
    #[error("Group has no conditions")]
    EmptyGroup,

    /// Group `operation` is not a known combinator
    #[error("Unknown combinator: {0}")]
    UnknownCombinator(String),

    /// Leaf `operation` is present but not a string
    #[error("Leaf 'operation' must be a string, got {0}")]
    InvalidOperation(String),

    /// Leaf without a usable `field` key
    #[error("Leaf condition is missing a field name")]
    MissingField,

    /// Value shape the wire format does not allow
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// `logical_operator` is not "and" or "or"
    #[error("Invalid logical_operator: {0}")]
    InvalidLogicalOperator(String),
}

/// Result type for wire operations
pub type Result<T> = std::result::Result<T, ParseError>;
