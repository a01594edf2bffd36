use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::errors::responses::{BadRequestJsonResponse, InternalServerErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ProductResult;
use crate::extractors::{ProductId, ReplaceRequest, Validated};
use crate::models::{
    CreateProduct, DeletedEnvelope, NotFoundBody, Product, ProductEnvelope, ProductListEnvelope,
    ReplaceProduct, ValidationErrorBody,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{Location, Violation};

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        replace_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            ReplaceProduct,
            ProductEnvelope,
            ProductListEnvelope,
            DeletedEnvelope,
            NotFoundBody,
            ValidationErrorBody,
            Violation,
            Location
        ),
        responses(BadRequestJsonResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(replace_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products, most expensive first
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All products", body = ProductListEnvelope),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListEnvelope>> {
    let data = service.list_products().await?;
    Ok(Json(ProductListEnvelope { data }))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductEnvelope),
        (status = 400, description = "Id is not an integer", body = ValidationErrorBody),
        (status = 404, description = "No product with that id", body = NotFoundBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<ProductEnvelope>> {
    let data = service.get_product(id).await?;
    Ok(Json(ProductEnvelope { data }))
}

/// Create a product
///
/// New products are always available.
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ProductEnvelope),
        (status = 400, description = "Field violations or malformed JSON", body = ValidationErrorBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(input): Validated<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let data = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ProductEnvelope { data })))
}

/// Replace a product
///
/// `availability` is optional and left untouched when omitted.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ReplaceProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductEnvelope),
        (status = 400, description = "Field violations or malformed JSON", body = ValidationErrorBody),
        (status = 404, description = "No product with that id", body = NotFoundBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ReplaceRequest { id, input }): Validated<ReplaceRequest>,
) -> ProductResult<Json<ProductEnvelope>> {
    let data = service.replace_product(id, input).await?;
    Ok(Json(ProductEnvelope { data }))
}

/// Flip a product's availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = ProductEnvelope),
        (status = 400, description = "Id is not an integer", body = ValidationErrorBody),
        (status = 404, description = "No product with that id", body = NotFoundBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<ProductEnvelope>> {
    let data = service.toggle_availability(id).await?;
    Ok(Json(ProductEnvelope { data }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeletedEnvelope),
        (status = 400, description = "Id is not an integer", body = ValidationErrorBody),
        (status = 404, description = "No product with that id", body = NotFoundBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<DeletedEnvelope>> {
    service.delete_product(id).await?;
    Ok(Json(DeletedEnvelope::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_operation() {
        let doc = ApiDoc::openapi();

        let collection = doc.paths.paths.get("").expect("collection path");
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let item = doc.paths.paths.get("/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.patch.is_some());
        assert!(item.delete.is_some());
    }
}
