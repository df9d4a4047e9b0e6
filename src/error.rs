//! Stringvault error types

use thiserror::Error;

/// Stringvault error type
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong input type (e.g. a non-string `value`)
    #[error("Type error: {0}")]
    Type(String),

    /// Malformed filter value or request shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internally contradictory filters
    #[error("Conflicting filters: {0}")]
    SemanticConflict(String),

    /// Lookup miss
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate create
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Store backing file unusable at open time
    #[error("Storage initialization error: {0}")]
    Initialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for stringvault operations
pub type Result<T> = std::result::Result<T, Error>;
