//! Unified error handling for the query service and its CLI.
//!
//! Provides a single error type that wraps domain failures together with
//! the I/O and serialization failures of loading and rendering users.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Caller errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // External errors
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for caller errors
            AppError::InvalidArgument(msg) => format!("Invalid argument: {}", msg),

            // Hide details for internal errors
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                format!("Could not read input: {}", e.kind())
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                format!("Malformed JSON at line {} column {}", e.line(), e.column())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
            DomainError::UnknownPrivilege(name) => {
                AppError::InvalidArgument(format!("unknown privilege '{}'", name))
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_invalid_argument_maps_to_app_invalid_argument() {
        let err: AppError = DomainError::invalid_argument("empty input").into();

        assert!(matches!(err, AppError::InvalidArgument(ref msg) if msg == "empty input"));
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_unknown_privilege_maps_to_invalid_argument() {
        let err: AppError = DomainError::unknown_privilege("ROOT").into();

        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert_eq!(err.user_message(), "Invalid argument: unknown privilege 'ROOT'");
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("stack details");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_serialization_message_has_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err = AppError::from(json_err);

        assert_eq!(err.code(), "SERIALIZATION_ERROR");
        assert!(err.user_message().starts_with("Malformed JSON at line 1"));
    }
}
