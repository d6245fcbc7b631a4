//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Webhook signature verification failed
    #[error("Webhook signature invalid: {0}")]
    WebhookSignature(String),

    /// Webhook payload parsing failed
    #[error("Webhook parse error: {0}")]
    WebhookParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Message to hand back to the HTTP caller
    ///
    /// Provider errors are forwarded as-is so the checkout page can show why
    /// Stripe refused the session.
    pub fn user_message(&self) -> String {
        match self {
            Self::Stripe(msg) | Self::WebhookSignature(msg) | Self::WebhookParse(msg) => {
                msg.clone()
            }
            Self::Config(_) => "Service configuration error.".into(),
        }
    }
}
