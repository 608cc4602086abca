//! irma-abused intake service
//!
//! Collects abuse notifications from users of the IRMA app: a report about a
//! misbehaving disclosure or signing request comes in over `POST /submit`,
//! gets normalized into a durable record and is written away for later human
//! review. The service only accepts and stores; there is no read side.

pub mod config;
pub mod handlers;
pub mod report;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Create the router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the intake server
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("irma-abused listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
