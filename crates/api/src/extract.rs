//! Body and path extractors whose rejections use the JSON error envelope.
//!
//! axum's own `Json` and `Path` reject with a plain-text body. These wrappers
//! route the rejection through [`AppError`] so a malformed request gets the
//! same `{ "error": ..., "code": ... }` shape as every other failure.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// JSON request body.
///
/// A body that is valid JSON but does not fit the target type (a string
/// quantity, a fractional or out-of-range number) is rejected with 422
/// `VALIDATION_ERROR`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters; an unparseable segment is rejected with 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
