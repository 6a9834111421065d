//! Route definitions for the `/volunteers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::volunteer;
use crate::state::AppState;

/// Routes mounted at `/volunteers`. All require auth.
///
/// ```text
/// GET  /     -> list_all
/// POST /     -> register
/// GET  /new  -> new_form
/// GET  /me   -> my_registration
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(volunteer::list_all).post(volunteer::register))
        .route("/new", get(volunteer::new_form))
        .route("/me", get(volunteer::my_registration))
}
