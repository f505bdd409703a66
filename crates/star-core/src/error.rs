//! Domain-level error types.

use star_shared::{LOGIN_REQUIRED_MESSAGE, PaginationError};
use thiserror::Error;

/// Domain errors - what callers of the post service see.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {message}")]
    Validation { message: String, fields: Vec<String> },

    #[error("{0}")]
    Unauthorized(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// No credential was supplied.
    pub fn login_required() -> Self {
        Self::Unauthorized(LOGIN_REQUIRED_MESSAGE.to_string())
    }

    /// Validation failure listing the fields that were missing or blank.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::Validation {
            message: format!("Missing required fields: {}", fields.join(", ")),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Validation failure on a single malformed field.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: vec![field.to_string()],
        }
    }
}

impl From<PaginationError> for DomainError {
    fn from(err: PaginationError) -> Self {
        DomainError::InvalidArgument(err.to_string())
    }
}

/// Repository-level errors, raised by backend adapters.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Malformed payload: {0}")]
    Decode(String),
}

impl From<PaginationError> for RepoError {
    fn from(err: PaginationError) -> Self {
        RepoError::InvalidArgument(err.to_string())
    }
}
