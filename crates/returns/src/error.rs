//! Error types for checked extraction.

use thiserror::Error;

/// Returned by `try_unwrap` and `try_failure` when the container holds the
/// other variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReturnsError {
    /// A successful value was requested from a failed container.
    #[error("Unwrap failed: {container} holds no successful value")]
    UnwrapFailed { container: String },

    /// A failed value was requested from a successful container.
    #[error("Failure requested from successful container {container}")]
    FailureOnSuccess { container: String },
}

impl ReturnsError {
    /// Returns the rendering of the container that was asked.
    pub fn container(&self) -> &str {
        match self {
            ReturnsError::UnwrapFailed { container } => container,
            ReturnsError::FailureOnSuccess { container } => container,
        }
    }
}

/// Convenience Result type for checked extraction.
pub type Result<T> = std::result::Result<T, ReturnsError>;
