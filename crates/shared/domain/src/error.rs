//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (files, CLI, serialization).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation was called with an argument it cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A privilege name outside the known set
    #[error("Unknown privilege: {0}")]
    UnknownPrivilege(String),
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DomainError::InvalidArgument(msg.into())
    }

    /// Create an unknown privilege error
    pub fn unknown_privilege(name: impl Into<String>) -> Self {
        DomainError::UnknownPrivilege(name.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
