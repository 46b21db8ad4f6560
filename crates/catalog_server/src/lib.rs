//! Library catalog server library

pub mod api;
pub mod authors;
pub mod config;
pub mod error;
pub mod sink;

use axum::{routing::get, Router};
use catalog_store::{AuthorCollectionArc, FjallAuthorCollection, MemoryAuthorCollection};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

// Re-export main types for external use
pub use self::authors::*;
pub use self::config::*;
pub use self::error::*;
pub use self::sink::*;

// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorCollectionArc,
}

impl AppState {
    pub fn new(authors: AuthorCollectionArc) -> Self {
        Self { authors }
    }
}

/// Open the author collection described by `store`
pub fn open_collection(store: &StoreConfig) -> AppResult<AuthorCollectionArc> {
    match &store.path {
        Some(path) => {
            tracing::info!("Opening author database at {}", path);
            Ok(Arc::new(FjallAuthorCollection::open(path)?))
        }
        None => {
            tracing::info!("No store path configured, using in-memory authors");
            Ok(Arc::new(MemoryAuthorCollection::new()))
        }
    }
}

/// Build the application router with tracing and CORS layers
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/authors", get(api::list_authors))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
