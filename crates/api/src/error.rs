use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use preheat_core::error::CoreError;
use serde_json::json;

/// Error type returned by preheat handlers.
///
/// Wraps [`CoreError`] from the mapping layer and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A validation or conversion failure from `preheat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a mapping-layer error into an HTTP status, error code, and message.
///
/// Client input problems map to 400. A missing object is a server-side bug
/// and maps to 500 with a sanitized message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NilInput { entity } => {
            tracing::error!(entity, "Nil object passed to converter");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
        CoreError::InvalidName(_) => client_error("INVALID_NAME", err),
        CoreError::InvalidAuthData(_) => client_error("INVALID_AUTH_DATA", err),
        CoreError::InvalidFilters(_) | CoreError::InvalidTrigger(_) => {
            client_error("INVALID_POLICY", err)
        }
        CoreError::TimestampOutOfRange(_) => client_error("TIMESTAMP_OUT_OF_RANGE", err),
    }
}

fn client_error(code: &'static str, err: &CoreError) -> (StatusCode, &'static str, String) {
    tracing::debug!(code, error = %err, "Rejected preheat request");
    (StatusCode::BAD_REQUEST, code, err.to_string())
}
