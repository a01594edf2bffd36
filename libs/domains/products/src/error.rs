use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::{NotFoundBody, ValidationErrorBody};
use crate::validation::Violation;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

/// Client errors keep the product API's own bodies; server errors go
/// through [`AppError`] so the driver message is logged but not returned.
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = id, "Product not found");
                (StatusCode::NOT_FOUND, Json(NotFoundBody::default())).into_response()
            }
            ProductError::Validation(errors) => {
                tracing::debug!(violations = errors.len(), "Rejected product request");
                (StatusCode::BAD_REQUEST, Json(ValidationErrorBody { errors })).into_response()
            }
            ProductError::Database(msg) => {
                AppError::InternalServerError(format!("Database error: {}", msg)).into_response()
            }
            ProductError::Internal(msg) => AppError::InternalServerError(msg).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = ProductError::NotFound(3).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Producto no encontrado intenta con otro."})
        );
    }

    #[tokio::test]
    async fn test_database_error_is_generic_500() {
        let err: ProductError = DbErr::Custom("relation \"products\" does not exist".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("relation"));
    }
}
