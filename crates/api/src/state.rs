use std::sync::Arc;

use cutroom_cloud::StorageProvider;
use cutroom_gen::GenClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cutroom_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object-storage provider for binary assets.
    pub storage: Arc<dyn StorageProvider>,
    /// External generation API client.
    pub gen: Arc<GenClient>,
}
