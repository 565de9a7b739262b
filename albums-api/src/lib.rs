//! albums-api library - in-memory album catalog over HTTP
//!
//! Exposes the router and state so integration tests can drive the service
//! without binding a socket.

use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod search;
pub mod store;

pub use crate::error::{ApiError, ApiResult};
pub use crate::store::AlbumStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The album store. Mutating handlers hold the write lock for the
    /// whole read-modify-write, so id assignment cannot race.
    pub store: Arc<RwLock<AlbumStore>>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: AlbumStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Build application router
///
/// Every route accepts cross-origin requests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::album_routes())
        .merge(api::health_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
