//! # clinnota-core
//!
//! Domain types shared by the ClinNota checkout relay and the web frontend.
//!
//! This crate has no I/O and compiles for `wasm32-unknown-unknown`, so the
//! pricing page and the server read prices from the same table:
//!
//! ```rust
//! use clinnota_core::{BillingCycle, PlanId};
//!
//! let plan = "professional".parse::<PlanId>().unwrap().plan();
//! assert_eq!(plan.price_cents(BillingCycle::Monthly), 7990);
//! ```

pub mod api;
pub mod error;
pub mod money;
pub mod plan;

pub use api::{
    CreateCheckoutSessionRequest, CreateCheckoutSessionResponse, ErrorResponse, HealthResponse,
    WebhookAck,
};
pub use error::{CoreError, Result};
pub use money::{format_brl, monthly_equivalent_cents};
pub use plan::{BillingCycle, PLANS, Plan, PlanId};
