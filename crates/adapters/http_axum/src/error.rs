//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use viewr_domain::error::ViewrError;

/// Maps [`ViewrError`] to a plain-text HTTP response with appropriate status code.
pub struct ApiError(ViewrError);

impl From<ViewrError> for ApiError {
    fn from(err: ViewrError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ViewrError::MissingIdentifier(namespace) => {
                (StatusCode::NOT_FOUND, namespace.missing_id_message().to_string())
            }
            ViewrError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND.to_string()),
            ViewrError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ViewrError::Encoding(err) => {
                tracing::error!(error = %err, "encoding error");
                internal_error()
            }
            ViewrError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                internal_error()
            }
        };

        (status, message).into_response()
    }
}

fn internal_error() -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
}

/// Body of every plain 404.
pub const NOT_FOUND: &str = "Not found";

/// Body of every 500.
pub const INTERNAL_ERROR: &str = "internal server error";
