//! Tally API Server
//!
//! HTTP surface for the calculator: router assembly, shared state, and the
//! middleware stack. The binary in `main.rs` only reads the environment and
//! binds the listener; everything testable lives here.

use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod error;
pub mod models;
pub mod routes;

use adapters::InMemoryHistoryRepository;
use application::HistoryService;
use error::ApiError;

/// Type alias for the application service with the concrete repository
/// implementation
pub type AppHistoryService = HistoryService<InMemoryHistoryRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<AppHistoryService>,
}

impl AppState {
    /// State backed by a fresh, empty in-memory ledger.
    pub fn new() -> Self {
        let repo = Arc::new(InMemoryHistoryRepository::new());
        Self {
            history: Arc::new(HistoryService::new(repo)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

async fn welcome() -> &'static str {
    "Welcome to the Calculator API!"
}

/// Catch-all for unmatched paths, any method.
async fn not_found() -> ApiError {
    ApiError::not_found()
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Unhandled error: {}", detail);
    ApiError::internal().into_response()
}

/// Build the full application router with shared state.
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/", get(welcome))
        .merge(routes::health::router())
        .merge(routes::calculate::router())
        .merge(routes::history::router())
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
