//! Error handling - failures rendered as `{code, success: false, message}`.

use actix_web::error::{JsonPayloadError, QueryPayloadError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use star_core::DomainError;
use star_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to error envelopes.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Validation(String),
    BadGateway(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::BadGateway(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.status_code().as_u16();
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::new(code, detail.clone()),
            AppError::BadRequest(detail) => ErrorResponse::new(code, detail.clone()),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized(detail.clone()),
            AppError::Validation(detail) => ErrorResponse::validation(detail.clone()),
            AppError::BadGateway(detail) => ErrorResponse::new(code, detail.clone()),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message, .. } => AppError::Validation(message),
            DomainError::Unauthorized(msg) => AppError::Unauthorized(msg),
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Upstream { status, message } => {
                tracing::error!(?status, "Upstream error: {}", message);
                AppError::BadGateway(message)
            }
            DomainError::InvalidArgument(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

// Extractor failures, rendered as error envelopes instead of plain text.

pub fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

pub fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_is_shown_verbatim() {
        let err = AppError::from(DomainError::Upstream {
            status: Some(503),
            message: "Service unavailable".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(matches!(err, AppError::BadGateway(ref m) if m == "Service unavailable"));
    }

    #[test]
    fn test_remote_unauthorized_message_is_kept() {
        let err = AppError::from(DomainError::Unauthorized("Token expired".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert!(matches!(err, AppError::Unauthorized(ref m) if m == "Token expired"));
    }

    #[test]
    fn test_not_found_names_the_post() {
        let err = AppError::from(DomainError::NotFound {
            entity_type: "Post",
            id: "post-9".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: Post with id post-9 not found");
    }
}
