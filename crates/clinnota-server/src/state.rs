//! Application State

use std::sync::Arc;

use clinnota_payments::{CheckoutProvider, WebhookHandler, WebhookVerifier};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,

    /// Checkout provider (None if Stripe is not configured)
    pub checkout: Option<Arc<dyn CheckoutProvider>>,

    /// Webhook verifier (None if no signing secret is configured)
    pub webhook_verifier: Option<Arc<WebhookVerifier>>,

    pub webhook_handler: WebhookHandler,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            checkout: None,
            webhook_verifier: None,
            webhook_handler: WebhookHandler::new(),
        }
    }

    #[must_use]
    pub fn with_checkout(mut self, checkout: Arc<dyn CheckoutProvider>) -> Self {
        self.checkout = Some(checkout);
        self
    }

    #[must_use]
    pub fn with_webhook_verifier(mut self, verifier: WebhookVerifier) -> Self {
        self.webhook_verifier = Some(Arc::new(verifier));
        self
    }
}
