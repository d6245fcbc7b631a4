//! HTTP wire types
//!
//! JSON bodies exchanged between the checkout page and the relay. Field names
//! are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plan::{BillingCycle, PlanId};

/// `POST /api/create-checkout-session` body
///
/// Kept as raw strings so an unknown plan is reported as a JSON error
/// instead of an extractor rejection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionRequest {
    pub plan_id: String,
    pub billing_cycle: String,
}

impl CreateCheckoutSessionRequest {
    pub fn new(plan: PlanId, cycle: BillingCycle) -> Self {
        Self {
            plan_id: plan.as_str().to_string(),
            billing_cycle: cycle.as_str().to_string(),
        }
    }

    /// Resolve against the catalog
    pub fn resolve(&self) -> Result<(PlanId, BillingCycle)> {
        Ok((self.plan_id.parse()?, self.billing_cycle.parse()?))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionResponse {
    pub session_id: String,

    /// Hosted checkout page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Acknowledgement returned to Stripe once a webhook is verified
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WebhookAck {
    pub received: bool,
}
