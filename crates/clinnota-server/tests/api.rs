//! Router-level tests for the checkout relay

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use clinnota_core::{BillingCycle, PlanId};
use clinnota_payments::{
    CheckoutProvider, CheckoutRequest, CheckoutSession, PaymentError, WebhookVerifier,
    signature_header,
};
use clinnota_server::{AppState, ServerConfig, router};
use tower::ServiceExt;

const WEBHOOK_SECRET: &str = "whsec_test_relay";

/// Records the last request and answers with a canned session
#[derive(Default)]
struct MockCheckout {
    last_request: Mutex<Option<CheckoutRequest>>,
    fail_with: Option<String>,
}

#[async_trait]
impl CheckoutProvider for MockCheckout {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> clinnota_payments::Result<CheckoutSession> {
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(message) = &self.fail_with {
            return Err(PaymentError::Stripe(message.clone()));
        }

        Ok(CheckoutSession {
            id: "cs_test_123".into(),
            url: Some("https://checkout.stripe.com/c/pay/cs_test_123".into()),
            plan: request.plan,
            billing_cycle: request.billing_cycle,
        })
    }
}

fn app_with(checkout: Arc<MockCheckout>) -> Router {
    let state = AppState::new(ServerConfig::default())
        .with_checkout(checkout)
        .with_webhook_verifier(WebhookVerifier::new(WEBHOOK_SECRET));
    router(state)
}

fn app() -> Router {
    app_with(Arc::new(MockCheckout::default()))
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn checkout_request(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/create-checkout-session")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn webhook_request(payload: &[u8], signature: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/webhook")
        .header("content-type", "application/json");
    if let Some(signature) = signature {
        builder = builder.header("stripe-signature", signature);
    }
    builder.body(Body::from(payload.to_vec())).unwrap()
}

fn checkout_session_object() -> serde_json::Value {
    let now = now();
    serde_json::json!({
        "object": "checkout.session",
        "id": "cs_test_123",
        "amount_total": 7990,
        "automatic_tax": { "enabled": false },
        "created": now,
        "custom_fields": [],
        "custom_text": {},
        "expires_at": now + 86_400,
        "livemode": false,
        "metadata": { "plan": "professional", "billing_cycle": "monthly" },
        "mode": "subscription",
        "payment_method_types": ["card"],
        "payment_status": "paid",
        "shipping_options": [],
    })
}

fn invoice_object() -> serde_json::Value {
    serde_json::json!({
        "object": "invoice",
        "id": "in_test_1",
        "subscription": "sub_test_1",
        "customer_email": "ana@clinica.com.br",
    })
}

fn subscription_object() -> serde_json::Value {
    let now = now();
    serde_json::json!({
        "object": "subscription",
        "id": "sub_test_1",
        "automatic_tax": { "enabled": false },
        "billing_cycle_anchor": now,
        "cancel_at_period_end": false,
        "created": now,
        "currency": "brl",
        "current_period_end": now + 2_592_000,
        "current_period_start": now,
        "customer": "cus_test_1",
        "items": { "object": "list", "data": [], "has_more": false, "url": "/v1/subscription_items" },
        "livemode": false,
        "metadata": {},
        "start_date": now,
        "status": "canceled",
    })
}

fn event_payload(event_type: &str, object: &serde_json::Value) -> Vec<u8> {
    serde_json::json!({
        "id": "evt_test_1",
        "object": "event",
        "created": now(),
        "livemode": false,
        "pending_webhooks": 1,
        "type": event_type,
        "data": { "object": object },
    })
    .to_string()
    .into_bytes()
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[tokio::test]
async fn test_health_check() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_checkout_known_plan_returns_session_id() {
    let checkout = Arc::new(MockCheckout::default());
    let response = app_with(checkout.clone())
        .oneshot(checkout_request(&serde_json::json!({
            "planId": "professional",
            "billingCycle": "yearly",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["sessionId"], "cs_test_123");
    assert_eq!(json["url"], "https://checkout.stripe.com/c/pay/cs_test_123");

    let request = checkout.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.plan, PlanId::Professional);
    assert_eq!(request.billing_cycle, BillingCycle::Yearly);
    assert_eq!(
        request.success_url,
        "http://localhost:3000/success?session_id={CHECKOUT_SESSION_ID}"
    );
    assert_eq!(request.cancel_url, "http://localhost:3000/checkout");
}

#[tokio::test]
async fn test_checkout_unknown_plan_is_client_error() {
    let checkout = Arc::new(MockCheckout::default());
    let response = app_with(checkout.clone())
        .oneshot(checkout_request(&serde_json::json!({
            "planId": "platinum",
            "billingCycle": "monthly",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_PLAN");
    assert!(json["error"].as_str().unwrap().contains("platinum"));
    assert!(checkout.last_request.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_checkout_unknown_billing_cycle_is_client_error() {
    let response = app()
        .oneshot(checkout_request(&serde_json::json!({
            "planId": "starter",
            "billingCycle": "weekly",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_PLAN");
}

#[tokio::test]
async fn test_checkout_provider_error_is_forwarded() {
    let checkout = Arc::new(MockCheckout {
        fail_with: Some("Invalid API Key provided: sk_test_***".into()),
        ..Default::default()
    });
    let response = app_with(checkout)
        .oneshot(checkout_request(&serde_json::json!({
            "planId": "starter",
            "billingCycle": "monthly",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid API Key provided: sk_test_***");
    assert_eq!(json["code"], "CHECKOUT_ERROR");
}

#[tokio::test]
async fn test_checkout_without_stripe_is_unavailable() {
    let app = router(AppState::new(ServerConfig::default()));
    let response = app
        .oneshot(checkout_request(&serde_json::json!({
            "planId": "starter",
            "billingCycle": "monthly",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "PAYMENTS_DISABLED");
}

#[tokio::test]
async fn test_checkout_unknown_plan_without_stripe_is_client_error() {
    let app = router(AppState::new(ServerConfig::default()));
    let response = app
        .oneshot(checkout_request(&serde_json::json!({
            "planId": "platinum",
            "billingCycle": "monthly",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_PLAN");
}

#[tokio::test]
async fn test_checkout_malformed_bodies_get_json_errors() {
    for body in [
        serde_json::json!({ "planId": "starter" }),
        serde_json::json!({ "billingCycle": "monthly" }),
        serde_json::json!({ "planId": 7, "billingCycle": "monthly" }),
    ] {
        let checkout = Arc::new(MockCheckout::default());
        let response = app_with(checkout.clone())
            .oneshot(checkout_request(&body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_PLAN");
        assert!(json["error"].is_string());
        assert!(checkout.last_request.lock().unwrap().is_none());
    }
}

#[tokio::test]
async fn test_checkout_without_json_content_type_gets_json_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/create-checkout-session")
                .header("content-type", "text/plain")
                .body(Body::from(r#"{"planId":"starter","billingCycle":"monthly"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_PLAN");
}

#[tokio::test]
async fn test_webhook_invalid_signature_rejected() {
    let payload = event_payload("checkout.session.completed", &checkout_session_object());
    let forged = signature_header(&payload, "whsec_attacker", now()).unwrap();

    let response = app()
        .oneshot(webhook_request(&payload, Some(&forged)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.starts_with("Webhook Error:"));
}

#[tokio::test]
async fn test_webhook_missing_signature_rejected() {
    let payload = event_payload("checkout.session.completed", &checkout_session_object());

    let response = app()
        .oneshot(webhook_request(&payload, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_webhook_stale_signature_rejected() {
    let payload = event_payload("invoice.payment_succeeded", &invoice_object());
    let signature = signature_header(&payload, WEBHOOK_SECRET, now() - 3600).unwrap();

    let response = app()
        .oneshot(webhook_request(&payload, Some(&signature)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_webhook_known_events_acknowledged() {
    for (event_type, object) in [
        ("checkout.session.completed", checkout_session_object()),
        ("invoice.payment_succeeded", invoice_object()),
        ("invoice.payment_failed", invoice_object()),
        ("customer.subscription.deleted", subscription_object()),
    ] {
        let payload = event_payload(event_type, &object);
        let signature = signature_header(&payload, WEBHOOK_SECRET, now()).unwrap();

        let response = app()
            .oneshot(webhook_request(&payload, Some(&signature)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{event_type}");
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "received": true })
        );
    }
}

#[tokio::test]
async fn test_webhook_unhandled_event_acknowledged() {
    let payload = event_payload("invoice.created", &invoice_object());
    let signature = signature_header(&payload, WEBHOOK_SECRET, now()).unwrap();

    let response = app()
        .oneshot(webhook_request(&payload, Some(&signature)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_webhook_without_secret_is_rejected() {
    let payload = event_payload("invoice.payment_failed", &invoice_object());

    for secret in [WEBHOOK_SECRET, "whsec_attacker"] {
        let app = router(AppState::new(ServerConfig::default()));
        let signature = signature_header(&payload, secret, now()).unwrap();

        let response = app
            .oneshot(webhook_request(&payload, Some(&signature)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{secret}");
        assert!(body_text(response).await.starts_with("Webhook Error:"));
    }
}

#[tokio::test]
async fn test_webhook_signed_unparseable_event_rejected() {
    let payload = br#"{"id":"evt_test_1","type":"invoice.paid"}"#;
    let signature = signature_header(payload, WEBHOOK_SECRET, now()).unwrap();

    let response = app()
        .oneshot(webhook_request(payload, Some(&signature)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
