//! Route definitions for the `/incidents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::incident;
use crate::state::AppState;

/// Routes mounted at `/incidents`. All require auth.
///
/// ```text
/// GET  /      -> list_all
/// POST /      -> report
/// GET  /mine  -> list_mine
/// GET  /new   -> new_form
/// GET  /{id}  -> details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(incident::list_all).post(incident::report))
        .route("/mine", get(incident::list_mine))
        .route("/new", get(incident::new_form))
        .route("/{id}", get(incident::details))
}
