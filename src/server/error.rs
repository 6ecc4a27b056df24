//! HTTP error mapping

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::application::SubmitReviewError;
use crate::domain::error::ReviewValidationError;

/// Body of every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan pada server.";

/// Body of a 413 response
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Ukuran rekaman audio melebihi batas 20 MB.";

/// Errors returned by API handlers
#[derive(Debug)]
pub enum ApiError {
    /// Incomplete or malformed review
    Validation(ReviewValidationError),
    /// Malformed multipart body
    BadRequest(String),
    /// An uploaded file exceeded the size cap
    PayloadTooLarge,
    /// Anything else; the detail is logged, never returned
    Internal(String),
}

impl From<SubmitReviewError> for ApiError {
    fn from(err: SubmitReviewError) -> Self {
        match err {
            SubmitReviewError::Validation(e) => Self::Validation(e),
            SubmitReviewError::Persistence(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::BadRequest(err.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
            ),
            ApiError::Internal(detail) => {
                error!(error = %detail, "Failed to handle review submission");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
