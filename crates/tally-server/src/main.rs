//! Tally API server binary
//!
//! Reads the environment, binds the listener, and hands off to the router
//! assembled in the library crate.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tally_server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let router = app(AppState::new());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;

    tracing::info!("Calculator API running on port {}", port);
    tracing::info!("Health check: http://localhost:{}/health", port);
    tracing::info!("Calculator: POST http://localhost:{}/calculate", port);
    tracing::info!("Swagger UI: http://localhost:{}/swagger-ui", port);

    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
