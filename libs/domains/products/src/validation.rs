//! Field rules for product requests.
//!
//! Rules are plain data: each [`FieldRule`] names a field, where to read it
//! from and an ordered list of [`Check`]s. [`evaluate`] runs every check of
//! every rule and reports one [`Violation`] per failed check, so a single
//! field can fail several checks at once. Nothing here depends on axum; the
//! HTTP binding lives in [`crate::extractors`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use utoipa::ToSchema;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]*\.)?[0-9]+$").expect("numeric pattern is valid")
});

/// Where a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Path parameters
    Params,
    /// JSON request body
    Body,
}

pub type Predicate = fn(Option<&Value>) -> bool;

/// A named predicate paired with the message reported when it fails.
#[derive(Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub predicate: Predicate,
    pub message: &'static str,
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub location: Location,
    pub checks: &'static [Check],
}

/// One failed check, serialized as
/// `{"type":"field","value":..,"msg":..,"path":..,"location":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: String,
    /// Submitted value, omitted when the field was absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl Violation {
    fn new(rule: &FieldRule, check: &Check, value: Option<Value>) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: check.message.to_string(),
            path: rule.field.to_string(),
            location: rule.location,
        }
    }
}

/// Raw request input the rules run against.
#[derive(Debug, Clone, Default)]
pub struct RequestFields {
    pub params: HashMap<String, String>,
    pub body: Value,
}

impl RequestFields {
    pub fn from_body(body: Value) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    pub fn from_params<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            params: params
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// Path values are always strings; body values keep their JSON type.
    pub fn lookup(&self, location: Location, field: &str) -> Option<Value> {
        match location {
            Location::Params => self.params.get(field).cloned().map(Value::String),
            Location::Body => self.body.get(field).cloned(),
        }
    }
}

/// Runs `rules` in declaration order and collects every failure.
pub fn evaluate(rules: &[FieldRule], fields: &RequestFields) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in rules {
        let value = fields.lookup(rule.location, rule.field);
        for check in rule.checks {
            if !(check.predicate)(value.as_ref()) {
                violations.push(Violation::new(rule, check, value.clone()));
            }
        }
    }

    violations
}

/// Text form of a value; absent and `null` are the empty string.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn is_int(value: Option<&Value>) -> bool {
    stringify(value).parse::<i64>().is_ok()
}

pub fn not_empty(value: Option<&Value>) -> bool {
    !stringify(value).is_empty()
}

pub fn is_numeric(value: Option<&Value>) -> bool {
    NUMERIC.is_match(&stringify(value))
}

pub fn is_positive(value: Option<&Value>) -> bool {
    as_number(value).is_some_and(|n| n > 0.0)
}

pub fn is_boolean_if_present(value: Option<&Value>) -> bool {
    value.is_none() || as_bool(value).is_some()
}

/// Finite numeric reading of a JSON number or numeric string.
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC.is_match(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Boolean reading of `true`/`false`, `"true"`/`"false"`/`"1"`/`"0"` or `1`/`0`.
pub fn as_bool(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub const ID: FieldRule = FieldRule {
    field: "id",
    location: Location::Params,
    checks: &[Check {
        name: "is_int",
        predicate: is_int,
        message: "Id no valido",
    }],
};

pub const NAME: FieldRule = FieldRule {
    field: "name",
    location: Location::Body,
    checks: &[Check {
        name: "not_empty",
        predicate: not_empty,
        message: "El nombre del Producto no puede ir vacio",
    }],
};

pub const PRICE: FieldRule = FieldRule {
    field: "price",
    location: Location::Body,
    checks: &[
        Check {
            name: "is_numeric",
            predicate: is_numeric,
            message: "Valor no valido",
        },
        Check {
            name: "not_empty",
            predicate: not_empty,
            message: "El precio del producto no puede ir vacio",
        },
        Check {
            name: "is_positive",
            predicate: is_positive,
            message: "Precio no valido",
        },
    ],
};

pub const AVAILABILITY: FieldRule = FieldRule {
    field: "availability",
    location: Location::Body,
    checks: &[Check {
        name: "is_boolean_if_present",
        predicate: is_boolean_if_present,
        message: "Valor para Disponibilidad no valida",
    }],
};

/// `GET`, `PATCH` and `DELETE /{id}`
pub const ID_RULES: &[FieldRule] = &[ID];
/// `POST /`
pub const CREATE_RULES: &[FieldRule] = &[NAME, PRICE];
/// `PUT /{id}`
pub const REPLACE_RULES: &[FieldRule] = &[ID, NAME, PRICE, AVAILABILITY];
