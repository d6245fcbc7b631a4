//! ClinNota checkout relay server
//!
//! Relays plan selections from the marketing site to Stripe Checkout and
//! receives Stripe's billing webhooks.

use std::sync::Arc;

use clinnota_payments::{StripeClient, WebhookVerifier};
use clinnota_server::{AppState, ServerConfig, router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let addr = config.bind_addr();
    let mut state = AppState::new(config);

    match StripeClient::from_env() {
        Ok(client) => {
            tracing::info!("✓ Stripe configured");
            state = state.with_checkout(Arc::new(client));
        }
        Err(e) => {
            tracing::warn!("⚠ {} - checkout disabled", e);
            tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
        }
    }

    match WebhookVerifier::from_env() {
        Ok(verifier) => {
            tracing::info!("✓ Webhook signing secret configured");
            state = state.with_webhook_verifier(verifier);
        }
        Err(e) => {
            tracing::warn!("⚠ {} - webhooks will be rejected", e);
            tracing::warn!("  1. Run: stripe listen --forward-to localhost:3001/api/webhook");
            tracing::warn!("  2. Copy the webhook secret into .env: STRIPE_WEBHOOK_SECRET=whsec_...");
            tracing::warn!("  3. Restart the server");
        }
    }

    tracing::info!(static_dir = %state.config.static_dir.display(), "Serving frontend");

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 ClinNota backend running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  POST /api/webhook                 - Stripe webhook");
    tracing::info!("  POST /api/create-checkout-session - Create Stripe checkout");
    tracing::info!("  GET  /api/health                  - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
