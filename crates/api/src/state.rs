use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable: the pool is reference-counted internally and the
/// configuration sits behind an `Arc`. Nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: relief_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
