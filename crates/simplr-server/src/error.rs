use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use simplr_core::error::CoreError;
use simplr_export::error::ExportError;
use simplr_gemini::error::GeminiError;
use simplr_github::error::GithubError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// Shown to the user as is, with the given status.
    Upstream { status: StatusCode, message: String },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Upstream { status, message } => (status, message),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl ApiError {
    pub fn session_not_found() -> Self {
        ApiError::NotFound("session not found".to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::NotFound(e.to_string())
    }
}

impl From<GithubError> for ApiError {
    fn from(e: GithubError) -> Self {
        match e {
            GithubError::Listing { .. } | GithubError::Raw { .. } => {
                tracing::warn!(error = %e, "github request failed");
                ApiError::Upstream {
                    status: StatusCode::BAD_GATEWAY,
                    message: e.to_string(),
                }
            }
            GithubError::NotADirectory(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Explanation failures keep their message and status so the panel can show
/// them verbatim.
impl From<GeminiError> for ApiError {
    fn from(e: GeminiError) -> Self {
        tracing::error!(error = %e, "explanation failed");
        ApiError::Upstream {
            status: StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: e.to_string(),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
