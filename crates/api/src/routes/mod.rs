pub mod auth;
pub mod donation;
pub mod health;
pub mod home;
pub mod incident;
pub mod volunteer;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
/// /auth/me                       current profile (requires auth)
///
/// /donations                     list mine, create
/// /donations/new                 blank form
/// /donations/all                 every donation with its donor
///
/// /incidents                     list all, report
/// /incidents/mine                list mine
/// /incidents/new                 blank form
/// /incidents/{id}                details
///
/// /volunteers                    list all, register
/// /volunteers/new                blank form
/// /volunteers/me                 my registration
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Accounts and sessions.
        .nest("/auth", auth::router())
        // Donation workflow.
        .nest("/donations", donation::router())
        // Incident reports.
        .nest("/incidents", incident::router())
        // Volunteer registrations.
        .nest("/volunteers", volunteer::router())
}
