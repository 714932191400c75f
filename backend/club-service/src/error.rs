/// Error types for club-service
///
/// Every recoverable error is translated to an HTTP status and a JSON body
/// at the boundary; store-level failures are logged and surfaced as a
/// generic internal error (the writes carry no dedup key, so they are not
/// retried).
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Result type for club-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// File I/O failed (media storage)
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource id has no row
    #[error("not found: {0}")]
    NotFound(String),

    /// Authenticated but neither owner nor admin
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// No usable session identity
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Board category outside the fixed set
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    /// Comment target kind outside {post, schedule, album}
    #[error("invalid target kind: {0}")]
    InvalidTargetKind(String),

    /// Comment row with no parent reference; should be unreachable
    #[error("comment {0} has no parent reference")]
    OrphanedComment(i64),

    /// Malformed or incomplete request input
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Duplicate unique value (username, nickname)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::OrphanedComment(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidCategory(_)
            | AppError::InvalidTargetKind(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest(errors.to_string())
    }
}

/// True when the store rejected the write for a missing referenced row.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation)
    )
}

/// True when the store rejected the write for a duplicate unique value.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}
