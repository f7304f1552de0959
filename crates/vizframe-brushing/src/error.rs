//! Error types for vizframe-brushing

use thiserror::Error;

/// Errors raised while translating between rows and identities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrushingError {
    /// Row-target translation needs the frame's identities
    #[error("DataFrame has no index column")]
    MissingIndexColumn,
}

/// Result type alias for brushing operations
pub type Result<T> = std::result::Result<T, BrushingError>;
