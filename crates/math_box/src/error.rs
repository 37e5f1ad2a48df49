//! Error types for the math_box crate

use thiserror::Error;

/// Errors that can occur while building or configuring a box tree
#[derive(Error, Debug)]
pub enum BoxError {
    /// Insert position past the end of a group's children
    #[error("Position {position} out of range for group with {len} children")]
    IndexOutOfRange { position: usize, len: usize },

    /// Integer value outside of a constant family's documented range
    #[error("Unknown {family} constant: {value}")]
    UnknownConstant { family: &'static str, value: i32 },

    /// Malformed length specification (e.g. "3furlongs")
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// Invalid unit context configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for box model operations
pub type BoxResult<T> = Result<T, BoxError>;
