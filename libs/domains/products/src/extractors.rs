//! Binds the field rules to axum.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    response::{IntoResponse, Response},
};
use axum_helpers::LenientJson;
use std::collections::HashMap;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, ReplaceProduct};
use crate::validation::{
    self, CREATE_RULES, FieldRule, ID_RULES, Location, REPLACE_RULES, RequestFields,
};

/// Input that can be built from request fields once its rules pass.
pub trait ValidatedInput: Sized + Send {
    const RULES: &'static [FieldRule];

    fn from_fields(fields: &RequestFields) -> ProductResult<Self>;
}

/// Extractor that runs `T::RULES` before the handler sees the request.
///
/// Path parameters are read only when a rule targets them, the body only
/// when a rule targets it. Any violation answers 400 with every failed
/// check and the handler is never called.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatedInput,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let wants = |location| T::RULES.iter().any(|rule| rule.location == location);
        let (mut parts, body) = req.into_parts();
        let mut fields = RequestFields::default();

        // An undecodable path leaves the params empty so the id rule reports it.
        if wants(Location::Params) {
            match Path::<HashMap<String, String>>::from_request_parts(&mut parts, state).await {
                Ok(Path(params)) => fields.params = params,
                Err(rejection) => tracing::debug!(%rejection, "Unreadable path parameters"),
            }
        }

        if wants(Location::Body) {
            let LenientJson(value) =
                LenientJson::from_request(Request::from_parts(parts, body), state).await?;
            fields.body = value;
        }

        let violations = validation::evaluate(T::RULES, &fields);
        if !violations.is_empty() {
            return Err(ProductError::Validation(violations).into_response());
        }

        T::from_fields(&fields)
            .map(Validated)
            .map_err(IntoResponse::into_response)
    }
}

/// Product id taken from the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

/// Path id plus replacement body for `PUT /{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceRequest {
    pub id: i32,
    pub input: ReplaceProduct,
}

/// Ids outside the `i32` range are well-formed but can never exist.
fn id_from(fields: &RequestFields) -> ProductResult<i32> {
    let value = fields.lookup(Location::Params, "id");
    let id: i64 = validation::stringify(value.as_ref())
        .parse()
        .map_err(|_| ProductError::Internal("validated id did not parse".to_string()))?;
    i32::try_from(id).map_err(|_| ProductError::NotFound(id))
}

fn price_from(fields: &RequestFields) -> ProductResult<f64> {
    let value = fields.lookup(Location::Body, "price");
    validation::as_number(value.as_ref())
        .ok_or_else(|| ProductError::Internal("validated price did not parse".to_string()))
}

fn name_from(fields: &RequestFields) -> String {
    validation::stringify(fields.lookup(Location::Body, "name").as_ref())
}

impl ValidatedInput for ProductId {
    const RULES: &'static [FieldRule] = ID_RULES;

    fn from_fields(fields: &RequestFields) -> ProductResult<Self> {
        id_from(fields).map(ProductId)
    }
}

impl ValidatedInput for CreateProduct {
    const RULES: &'static [FieldRule] = CREATE_RULES;

    fn from_fields(fields: &RequestFields) -> ProductResult<Self> {
        Ok(CreateProduct {
            name: name_from(fields),
            price: price_from(fields)?,
        })
    }
}

impl ValidatedInput for ReplaceRequest {
    const RULES: &'static [FieldRule] = REPLACE_RULES;

    fn from_fields(fields: &RequestFields) -> ProductResult<Self> {
        let availability = fields.lookup(Location::Body, "availability");

        Ok(ReplaceRequest {
            id: id_from(fields)?,
            input: ReplaceProduct {
                name: name_from(fields),
                price: price_from(fields)?,
                availability: validation::as_bool(availability.as_ref()),
            },
        })
    }
}
