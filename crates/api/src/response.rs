//! Shared response envelope types for API handlers.
//!
//! Successful bodies use a `{ "data": ... }` envelope. Rejected forms add an
//! `errors` map next to the echoed input.

use relief_core::validation::FieldErrors;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "errors": {...}, "code": "VALIDATION_ERROR" }` for a form
/// that failed validation.
#[derive(Debug, Serialize)]
pub struct InvalidFormResponse<T: Serialize> {
    pub data: T,
    pub errors: FieldErrors,
    pub code: &'static str,
}
