//! HTTP Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use clinnota_core::{
    CreateCheckoutSessionRequest, CreateCheckoutSessionResponse, ErrorResponse, HealthResponse,
    WebhookAck,
};
use clinnota_payments::CheckoutRequest;

use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

fn webhook_error(status: StatusCode, message: &str) -> (StatusCode, String) {
    (status, format!("Webhook Error: {message}"))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Create a Stripe checkout session for the selected plan
///
/// Malformed bodies and unknown plans are rejected before the payment
/// configuration is consulted.
pub async fn create_checkout_session(
    State(state): State<AppState>,
    payload: Result<Json<CreateCheckoutSessionRequest>, JsonRejection>,
) -> Result<Json<CreateCheckoutSessionResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected checkout body: {}", rejection.body_text());
        api_error(
            StatusCode::BAD_REQUEST,
            "INVALID_PLAN",
            rejection.body_text(),
        )
    })?;

    let (plan, billing_cycle) = payload.resolve().map_err(|e| {
        tracing::warn!(
            plan_id = %payload.plan_id,
            billing_cycle = %payload.billing_cycle,
            "Rejected checkout: {}",
            e
        );
        api_error(StatusCode::BAD_REQUEST, "INVALID_PLAN", e.to_string())
    })?;

    let checkout = state.checkout.as_ref().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "PAYMENTS_DISABLED",
            "Payments not configured",
        )
    })?;

    let request = CheckoutRequest {
        plan,
        billing_cycle,
        success_url: state.config.success_url(),
        cancel_url: state.config.cancel_url(),
    };

    let session = checkout.create_checkout_session(request).await.map_err(|e| {
        tracing::error!("❌ Checkout error: {}", e);
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "CHECKOUT_ERROR",
            e.user_message(),
        )
    })?;

    Ok(Json(CreateCheckoutSessionResponse {
        session_id: session.id,
        url: session.url,
    }))
}

/// Stripe webhook receiver
///
/// The body is taken as raw bytes: the signature covers the exact payload.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, (StatusCode, String)> {
    let verifier = state.webhook_verifier.as_ref().ok_or_else(|| {
        tracing::warn!("❌ Webhook received but STRIPE_WEBHOOK_SECRET is not set");
        webhook_error(StatusCode::BAD_REQUEST, "webhook secret not configured")
    })?;

    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("❌ Webhook without Stripe signature");
            webhook_error(StatusCode::BAD_REQUEST, "missing stripe-signature header")
        })?;

    let event = verifier.construct_event(&body, signature).map_err(|e| {
        tracing::warn!("❌ Webhook verification failed: {}", e);
        webhook_error(StatusCode::BAD_REQUEST, &e.user_message())
    })?;

    state.webhook_handler.handle(&event);

    Ok(Json(WebhookAck { received: true }))
}
