//! # clinnota-payments
//!
//! Stripe integration for ClinNota subscriptions.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  planId, cycle  ┌─────────────┐   session    ┌─────────────────┐
//! │  /checkout  │────────────────▶│    relay    │─────────────▶│  Stripe Hosted  │
//! │   (web)     │◀────────────────│  (server)   │              │  Checkout Page  │
//! └─────────────┘  sessionId, url └─────────────┘              └────────┬────────┘
//!                                        ▲                              │
//!                                        │ signed webhook               │ redirect
//!                                        └──────────────────────┐       ▼
//!                                                          ┌────┴────────────┐
//!                                                          │    /success     │
//!                                                          └─────────────────┘
//! ```
//!
//! Checkout sessions are created through the [`CheckoutProvider`] trait, backed
//! in production by [`StripeClient`]. Webhooks are authenticated by
//! [`WebhookVerifier`] through the Stripe SDK and then classified and logged by [`WebhookHandler`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clinnota_core::{BillingCycle, PlanId};
//! use clinnota_payments::{CheckoutProvider, CheckoutRequest, StripeClient};
//!
//! let client = StripeClient::new("sk_test_xxx");
//!
//! let session = client.create_checkout_session(CheckoutRequest {
//!     plan: PlanId::Professional,
//!     billing_cycle: BillingCycle::Monthly,
//!     success_url: "https://clinnota.com.br/success?session_id={CHECKOUT_SESSION_ID}".into(),
//!     cancel_url: "https://clinnota.com.br/checkout".into(),
//! }).await?;
//!
//! // Redirect user to: session.url
//! ```

mod checkout;
mod error;
mod webhook;

pub use checkout::{CheckoutProvider, CheckoutRequest, CheckoutSession, StripeClient};
pub use error::{PaymentError, Result};
pub use webhook::{WebhookEvent, WebhookHandler, WebhookVerifier, signature_header};
