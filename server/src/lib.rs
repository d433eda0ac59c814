//! HTTP API for Roster student records.
//!
//! Exposes create/list/update/delete over `/students`. Handlers hold no
//! state of their own; every request goes to the shared [`StudentStore`].

use std::future::Future;
use std::path::Path;

use axum::routing::{get, put};
use axum::Router;
use roster_store::StudentStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;

pub use config::{log_directive, LogFilterSource, ServerConfig};
pub use error::{ApiError, ApiResult, Operation};

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: StudentStore,
}

fn api_routes(store: StudentStore) -> Router {
    Router::new()
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/{id}",
            put(handlers::update_student).delete(handlers::delete_student),
        )
        .with_state(AppState { store })
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Build the `/students` API router over the given store.
pub fn build_router(store: StudentStore) -> Router {
    with_layers(api_routes(store))
}

/// Build the API router plus static serving of the browser page from
/// `public_dir` for every other path.
pub fn build_app(store: StudentStore, public_dir: impl AsRef<Path>) -> Router {
    with_layers(api_routes(store).fallback_service(ServeDir::new(public_dir)))
}

/// Serve the app on `config`'s address until `shutdown` resolves.
pub async fn serve(
    config: &ServerConfig,
    store: StudentStore,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!("API server running on http://{}", listener.local_addr()?);
    let app = build_app(store, &config.public_dir);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
