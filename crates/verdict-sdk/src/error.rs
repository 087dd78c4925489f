//! SDK error types

use thiserror::Error;

/// SDK error
#[derive(Error, Debug)]
pub enum SdkError {
    /// Wire format parse failure
    #[error("Parse error: {0}")]
    Parse(#[from] verdict_wire::ParseError),

    /// JSON encoding failure
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
