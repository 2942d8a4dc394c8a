use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domains::DomainError;

use crate::translator::translate;

/// Response-side wrapper over `DomainError`. 4xx bodies carry
/// `status: "fail"` with a user-facing message; 500 carries
/// `status: "error"` and never leaks the internal message.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body_status, message) = match self.0 {
            DomainError::Validation(identifier) => (
                StatusCode::BAD_REQUEST,
                "fail",
                translate(&identifier).to_string(),
            ),
            DomainError::Authentication(message) => (StatusCode::UNAUTHORIZED, "fail", message),
            DomainError::Authorization(message) => (StatusCode::FORBIDDEN, "fail", message),
            DomainError::NotFound(message) => (StatusCode::NOT_FOUND, "fail", message),
            DomainError::Database(message) => {
                tracing::error!(error = %message, "request failed on a server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "terjadi kegagalan pada server kami".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({ "status": body_status, "message": message })),
        )
            .into_response()
    }
}
