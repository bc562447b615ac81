use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use platecheck_core::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Plate validation failures are not errors; they are ordinary results.
/// This type covers malformed requests and failures to build the matcher.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `platecheck_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request missing a required field or carrying an unreadable body.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Core(core) => {
                tracing::error!(error = %core, "Core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
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

