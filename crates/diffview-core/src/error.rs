//! Error types for diff operations.

use thiserror::Error;

/// Errors that can occur while computing a diff.
#[derive(Error, Debug)]
pub enum DiffError {
    /// A string entry point received input that is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The compared structures nest deeper than the configured limit.
    /// Raised instead of letting pathological inputs exhaust the stack.
    #[error("nesting depth exceeds the configured limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// Convenience alias used throughout diffview-core.
pub type Result<T> = std::result::Result<T, DiffError>;
