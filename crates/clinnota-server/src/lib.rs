//! ClinNota checkout relay
//!
//! Axum service with three API routes:
//!
//! | route | purpose |
//! |---|---|
//! | `POST /api/webhook` | Stripe webhook receiver (signature verified) |
//! | `POST /api/create-checkout-session` | opens a hosted Stripe Checkout session |
//! | `GET /api/health` | liveness |
//!
//! Every other path is served from the built web frontend, falling back to
//! `index.html` so client-side routes load directly.

pub mod config;
pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use config::ServerConfig;
pub use state::AppState;

use crate::handlers::{create_checkout_session, health_check, stripe_webhook};

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = &state.config.static_dir;
    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/webhook", post(stripe_webhook))
        .route("/api/create-checkout-session", post(create_checkout_session))
        .route("/api/health", get(health_check))
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
