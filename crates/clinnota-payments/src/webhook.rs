//! Stripe Webhook Handling
//!
//! Verifies the `Stripe-Signature` header with the Stripe SDK and classifies
//! the billing events the relay cares about.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use stripe::{Event, EventObject, EventType, Invoice, Webhook, WebhookError};

use crate::error::{PaymentError, Result};

/// Maximum age of a signed payload, in seconds (the SDK's own window)
const TOLERANCE_SECS: u64 = 300;

/// Checks webhook signatures against the endpoint secret
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: String,
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier").finish_non_exhaustive()
    }
}

impl WebhookVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Create from `STRIPE_WEBHOOK_SECRET`
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .map_err(|_| PaymentError::Config("STRIPE_WEBHOOK_SECRET not set".into()))?;

        Ok(Self::new(secret))
    }

    /// Verify webhook signature and parse event
    pub fn construct_event(&self, payload: &[u8], signature: &str) -> Result<Event> {
        self.construct_event_at(payload, signature, Utc::now().timestamp())
    }

    fn construct_event_at(&self, payload: &[u8], signature: &str, now: i64) -> Result<Event> {
        let payload = std::str::from_utf8(payload)
            .map_err(|e| PaymentError::WebhookParse(format!("payload is not UTF-8: {e}")))?;

        // The SDK computes `now - t` unchecked
        check_timestamp(signature, now)?;

        Webhook::construct_event_with_timestamp(payload, signature, &self.secret, now).map_err(
            |e| match e {
                WebhookError::BadParse(err) => PaymentError::WebhookParse(err.to_string()),
                other => PaymentError::WebhookSignature(other.to_string()),
            },
        )
    }
}

/// Reject a `t=` outside the tolerance window. Malformed headers are left to
/// the SDK.
fn check_timestamp(signature: &str, now: i64) -> Result<()> {
    let timestamp = signature
        .split(',')
        .find_map(|part| part.trim().strip_prefix("t="))
        .and_then(|t| t.parse::<i64>().ok());

    match timestamp {
        Some(t) if now.abs_diff(t) > TOLERANCE_SECS => Err(PaymentError::WebhookSignature(
            "Timestamp outside the tolerance zone".into(),
        )),
        _ => Ok(()),
    }
}

/// Build a valid `Stripe-Signature` header for `payload`
///
/// Signs the way Stripe does for deliveries; used to exercise the webhook
/// endpoint locally without the Stripe CLI.
pub fn signature_header(payload: &[u8], secret: &str, timestamp: i64) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| PaymentError::Config(format!("Invalid webhook secret: {e}")))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    Ok(format!(
        "t={timestamp},v1={}",
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Billing events the relay recognises
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WebhookEvent {
    /// `checkout.session.completed`
    CheckoutCompleted {
        session_id: String,
        customer_email: Option<String>,
        amount_total: Option<i64>,
        plan: Option<String>,
    },

    /// `invoice.payment_succeeded`
    InvoicePaymentSucceeded {
        invoice_id: String,
        subscription_id: Option<String>,
    },

    /// `invoice.payment_failed`
    InvoicePaymentFailed {
        invoice_id: String,
        subscription_id: Option<String>,
        customer_email: Option<String>,
    },

    /// `customer.subscription.deleted`
    SubscriptionDeleted { subscription_id: String },

    /// Unhandled event type
    Other { event_type: String },
}

impl WebhookEvent {
    /// Classify a verified event
    ///
    /// A known type carrying an unexpected object falls through to `Other`.
    pub fn from_event(event: &Event) -> Self {
        match (event.type_, &event.data.object) {
            (EventType::CheckoutSessionCompleted, EventObject::CheckoutSession(session)) => {
                Self::CheckoutCompleted {
                    session_id: session.id.to_string(),
                    customer_email: session.customer_email.clone().or_else(|| {
                        session
                            .customer_details
                            .as_ref()
                            .and_then(|details| details.email.clone())
                    }),
                    amount_total: session.amount_total,
                    plan: session
                        .metadata
                        .as_ref()
                        .and_then(|m| m.get("plan"))
                        .cloned(),
                }
            }

            (EventType::InvoicePaymentSucceeded, EventObject::Invoice(invoice)) => {
                Self::InvoicePaymentSucceeded {
                    invoice_id: invoice.id.to_string(),
                    subscription_id: subscription_id(invoice),
                }
            }

            (EventType::InvoicePaymentFailed, EventObject::Invoice(invoice)) => {
                Self::InvoicePaymentFailed {
                    invoice_id: invoice.id.to_string(),
                    subscription_id: subscription_id(invoice),
                    customer_email: invoice.customer_email.clone(),
                }
            }

            (EventType::CustomerSubscriptionDeleted, EventObject::Subscription(sub)) => {
                Self::SubscriptionDeleted {
                    subscription_id: sub.id.to_string(),
                }
            }

            (event_type, _) => Self::Other {
                event_type: event_type.to_string(),
            },
        }
    }
}

fn subscription_id(invoice: &Invoice) -> Option<String> {
    invoice.subscription.as_ref().map(|s| s.id().to_string())
}

/// Logs verified billing events
///
/// Subscription activation is not wired up yet; events are acknowledged and
/// recorded in the logs only.
#[derive(Clone, Debug, Default)]
pub struct WebhookHandler;

impl WebhookHandler {
    pub const fn new() -> Self {
        Self
    }

    /// Process a webhook event
    pub fn handle(&self, event: &Event) -> WebhookEvent {
        tracing::info!(event_id = %event.id, event_type = %event.type_, "✅ Webhook verified");

        let parsed = WebhookEvent::from_event(event);

        match &parsed {
            WebhookEvent::CheckoutCompleted {
                session_id,
                customer_email,
                amount_total,
                plan,
            } => {
                // TODO: activate the customer's subscription once accounts exist
                tracing::info!(
                    session_id = %session_id,
                    email = ?customer_email,
                    amount_total = ?amount_total,
                    plan = ?plan,
                    "💰 Checkout completed"
                );
            }

            WebhookEvent::InvoicePaymentSucceeded {
                invoice_id,
                subscription_id,
            } => {
                tracing::info!(
                    invoice_id = %invoice_id,
                    subscription_id = ?subscription_id,
                    "🔄 Recurring payment succeeded"
                );
            }

            WebhookEvent::InvoicePaymentFailed {
                invoice_id,
                subscription_id,
                customer_email,
            } => {
                tracing::warn!(
                    invoice_id = %invoice_id,
                    subscription_id = ?subscription_id,
                    email = ?customer_email,
                    "❌ Recurring payment failed"
                );
            }

            WebhookEvent::SubscriptionDeleted { subscription_id } => {
                tracing::info!(subscription_id = %subscription_id, "🚫 Subscription cancelled");
            }

            WebhookEvent::Other { event_type } => {
                tracing::debug!(event_type = %event_type, "Unhandled webhook event");
            }
        }

        parsed
    }
}
