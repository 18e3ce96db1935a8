use std::sync::Arc;

use meridian_cloud::ObjectStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: meridian_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage used to presign image URLs.
    pub storage: Arc<dyn ObjectStorage>,
}
