//! Unified error types for the domain layer
//!
//! Provides a common error type for model validation and parsing, so callers
//! never have to handle String or anyhow errors from domain code.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Validation failed (e.g., a definition referencing its title field)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for authored definition files)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a validation error for invariant violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error for malformed input.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
