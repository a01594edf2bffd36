use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response, messages};

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        messages::NOT_FOUND_ROUTE.to_string(),
        ErrorCode::NotFound,
    )
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        messages::METHOD_NOT_ALLOWED.to_string(),
        ErrorCode::MethodNotAllowed,
    )
}
