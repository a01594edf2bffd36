//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use domain_products::ProductRepository;

/// Routes mounted under `/api`.
pub fn routes<R: ProductRepository + 'static>(repository: R) -> Router {
    Router::new().nest("/products", products::router(repository))
}
