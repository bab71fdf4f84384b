//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both kinds are detected before any state is touched, so a failed call
/// leaves the aggregate exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied a structurally invalid value (blank required
    /// string, negative amount, malformed identifier).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request is well-formed but breaks a rule given the current state
    /// (duplicate key, missing key, self-reference, currency mismatch).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

/// Reject blank (empty or whitespace-only) strings with `InvalidArgument`.
pub fn ensure_not_blank(value: &str, what: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(format!("{what} cannot be empty")));
    }
    Ok(())
}
