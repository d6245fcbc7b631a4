//! API Client

use clinnota_core::{
    BillingCycle, CreateCheckoutSessionRequest, CreateCheckoutSessionResponse, PlanId,
};

/// Relay base URL: `CLINNOTA_BACKEND_URL` at build time, else the page origin
fn backend_url() -> String {
    option_env!("CLINNOTA_BACKEND_URL").map_or_else(
        || {
            web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| "http://localhost:3001".into())
        },
        |url| url.trim_end_matches('/').to_string(),
    )
}

/// Ask the relay for a Stripe checkout session
pub async fn create_checkout_session(
    plan: PlanId,
    billing_cycle: BillingCycle,
) -> Result<CreateCheckoutSessionResponse, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/create-checkout-session", backend_url()))
        .json(&CreateCheckoutSessionRequest::new(plan, billing_cycle))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"]
            .as_str()
            .unwrap_or("Erro ao criar sessão de checkout")
            .to_string())
    }
}

/// Send the browser to the hosted checkout page
pub fn redirect(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("janela indisponível")?;
    window
        .location()
        .set_href(url)
        .map_err(|e| format!("{e:?}"))
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
