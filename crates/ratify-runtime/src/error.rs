//! Runtime error types
//!
//! Errors split into two classes: localized errors (type mismatches,
//! write-path conflicts, arithmetic failures) that are absorbed into the
//! trace, and configuration errors that abort the whole evaluation.

use ratify_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Operand or field value type wrong for the operator/action
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// An intermediate path segment exists but is not an object
    #[error("Path conflict: {0}")]
    PathConflict(String),

    /// Write to an array index past the end
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Malformed field path (empty segment, bad index, unbalanced bracket)
    #[error("Invalid field path: {0}")]
    InvalidPath(String),

    /// Active rule count exceeds the configured cap
    #[error("Rule count {count} exceeds the configured limit of {max}")]
    RuleLimitExceeded { count: usize, max: usize },
}

impl RuntimeError {
    /// Configuration-class errors abort the whole `evaluate` call;
    /// everything else is localized to one condition or action.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RuntimeError::InvalidPath(_) | RuntimeError::RuleLimitExceeded { .. }
        )
    }
}

impl From<CoreError> for RuntimeError {
    fn from(err: CoreError) -> Self {
        RuntimeError::TypeMismatch(err.to_string())
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
