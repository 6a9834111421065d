//! Request extractors applied before any workflow runs.
//!
//! - [`auth::AuthUser`] -- resolves the caller from a JWT Bearer token.

pub mod auth;
