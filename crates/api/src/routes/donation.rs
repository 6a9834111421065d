//! Route definitions for the `/donations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::donation;
use crate::state::AppState;

/// Routes mounted at `/donations`. All require auth.
///
/// ```text
/// GET  /     -> list_mine
/// POST /     -> create
/// GET  /new  -> new_form
/// GET  /all  -> list_all
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(donation::list_mine).post(donation::create))
        .route("/new", get(donation::new_form))
        .route("/all", get(donation::list_all))
}
