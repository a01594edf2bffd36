use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::Violation;

/// Message returned in place of the deleted record.
pub const DELETED_MESSAGE: &str = "Producto Eliminado correctemente";

/// Message returned whenever an id has no matching product.
pub const NOT_FOUND_MESSAGE: &str = "Producto no encontrado intenta con otro.";

/// Product as exposed by the API. Storage timestamps are never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": 1, "name": "Monitor Curvo de 49 Pulgadas", "price": 300, "availability": true}))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl Product {
    /// Full replace of the mutable fields. `availability` is kept when absent.
    pub fn apply_replace(mut self, input: ReplaceProduct) -> Self {
        self.name = input.name;
        self.price = input.price;
        if let Some(availability) = input.availability {
            self.availability = availability;
        }
        self
    }

    pub fn toggle_availability(mut self) -> Self {
        self.availability = !self.availability;
        self
    }
}

/// Body of `POST /`.
///
/// New products are always available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Monitor Curvo de 49 Pulgadas", "price": 399}))]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

/// Body of `PUT /{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Monitor Curvo de 49 Pulgadas", "price": 300, "availability": true}))]
pub struct ReplaceProduct {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductEnvelope {
    pub data: Product,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListEnvelope {
    pub data: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"data": DELETED_MESSAGE}))]
pub struct DeletedEnvelope {
    pub data: String,
}

impl Default for DeletedEnvelope {
    fn default() -> Self {
        Self {
            data: DELETED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"error": NOT_FOUND_MESSAGE}))]
pub struct NotFoundBody {
    pub error: String,
}

impl Default for NotFoundBody {
    fn default() -> Self {
        Self {
            error: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// 400 body listing every failed field check.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"errors": [{
    "type": "field",
    "value": "hola",
    "msg": "Precio no valido",
    "path": "price",
    "location": "body"
}]}))]
pub struct ValidationErrorBody {
    pub errors: Vec<Violation>,
}
