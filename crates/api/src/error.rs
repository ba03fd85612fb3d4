use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;

/// Generic body for every 5xx response.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce plain-text error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that could not be read as JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Entity not found");
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(err) => {
                log_store_error(err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

/// Log a store failure. Constraint violations, statement timeouts and pool
/// exhaustion all end up here; none of the detail reaches the caller.
fn log_store_error(err: &sqlx::Error) {
    match err {
        sqlx::Error::Database(db_err) => {
            tracing::error!(
                error = %db_err,
                code = db_err.code().as_deref().unwrap_or("unknown"),
                "Database error"
            );
        }
        other => {
            tracing::error!(error = %other, "Database error");
        }
    }
}
