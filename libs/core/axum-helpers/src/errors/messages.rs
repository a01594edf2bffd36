//! Message constants shared by extractors and fallbacks.

pub const INVALID_JSON: &str = "Invalid JSON format.";
pub const NOT_FOUND_ROUTE: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
