//! Products Domain
//!
//! CRUD over a single `Product` entity.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelopes, OpenAPI
//! └──────┬──────┘
//!        │  Validated<T> extractor runs the field rules first
//! ┌──────▼──────┐
//! │   Service   │  ← Lookup / mutate / not-found decisions
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and PostgreSQL implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← DTOs and the sea-orm entity
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{ProductError, ProductResult};
pub use extractors::{ProductId, ReplaceRequest, Validated, ValidatedInput};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, DELETED_MESSAGE, DeletedEnvelope, NOT_FOUND_MESSAGE, NotFoundBody, Product,
    ProductEnvelope, ProductListEnvelope, ReplaceProduct, ValidationErrorBody,
};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use validation::{Location, Violation};
