//! Stripe Checkout Integration
//!
//! Creates hosted Checkout sessions for ClinNota subscriptions. Prices come
//! from the shared plan table and are sent inline as `price_data`, so no
//! Price objects need to exist in the Stripe dashboard.

use std::collections::HashMap;

use async_trait::async_trait;
use clinnota_core::{BillingCycle, Plan, PlanId};
use serde::{Deserialize, Serialize};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionLocale, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionLineItemsPriceDataRecurring,
    CreateCheckoutSessionLineItemsPriceDataRecurringInterval,
    CreateCheckoutSessionPaymentMethodTypes, Currency, StripeError,
};

use crate::error::{PaymentError, Result};

/// Anything that can open a hosted checkout session
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession>;
}

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from `STRIPE_SECRET_KEY`
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }
}

#[async_trait]
impl CheckoutProvider for StripeClient {
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let params = session_params(&request);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(provider_message(e)))?;

        tracing::info!(
            session_id = %session.id,
            plan = %request.plan,
            billing_cycle = %request.billing_cycle,
            "✅ Checkout session created"
        );

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url: session.url,
            plan: request.plan,
            billing_cycle: request.billing_cycle,
        })
    }
}

/// Build the Stripe request for a subscription checkout
fn session_params(request: &CheckoutRequest) -> CreateCheckoutSession<'_> {
    let plan = request.plan.plan();
    let cycle = request.billing_cycle;

    let mut params = CreateCheckoutSession::new();
    params.mode = Some(CheckoutSessionMode::Subscription);
    // PIX needs extra account setup on Stripe, cards only for now
    params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);
    params.locale = Some(CheckoutSessionLocale::PtBr);
    params.success_url = Some(&request.success_url);
    params.cancel_url = Some(&request.cancel_url);

    let mut metadata = HashMap::new();
    metadata.insert("plan".to_string(), request.plan.as_str().to_string());
    metadata.insert("billing_cycle".to_string(), cycle.as_str().to_string());
    params.metadata = Some(metadata);

    params.line_items = Some(vec![CreateCheckoutSessionLineItems {
        quantity: Some(1),
        price_data: Some(CreateCheckoutSessionLineItemsPriceData {
            currency: Currency::BRL,
            unit_amount: Some(plan.price_cents(cycle)),
            product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                name: plan.product_name(),
                description: Some(Plan::product_description(cycle)),
                ..Default::default()
            }),
            recurring: Some(CreateCheckoutSessionLineItemsPriceDataRecurring {
                interval: recurring_interval(cycle),
                interval_count: Some(1),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }]);

    params
}

const fn recurring_interval(
    cycle: BillingCycle,
) -> CreateCheckoutSessionLineItemsPriceDataRecurringInterval {
    match cycle {
        BillingCycle::Monthly => CreateCheckoutSessionLineItemsPriceDataRecurringInterval::Month,
        BillingCycle::Yearly => CreateCheckoutSessionLineItemsPriceDataRecurringInterval::Year,
    }
}

/// Prefer Stripe's own explanation over the transport wrapper
fn provider_message(err: StripeError) -> String {
    match err {
        StripeError::Stripe(req) => req.message.clone().unwrap_or_else(|| req.to_string()),
        other => other.to_string(),
    }
}

/// Request to create a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Plan to subscribe to
    pub plan: PlanId,

    pub billing_cycle: BillingCycle,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Stripe session ID
    pub id: String,

    /// Hosted checkout page, absent for embedded sessions
    pub url: Option<String>,

    pub plan: PlanId,

    pub billing_cycle: BillingCycle,
}
