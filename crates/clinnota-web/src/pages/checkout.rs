//! Checkout Page
//!
//! Plan and billing-cycle selection. Submitting asks the relay for a Stripe
//! Checkout session and sends the browser to the hosted payment page.

use clinnota_core::{BillingCycle, PLANS, Plan, PlanId, format_brl, monthly_equivalent_cents};
use leptos::prelude::*;

use crate::api;

const INCLUDED: [&str; 4] = [
    "Teste grátis de 30 dias",
    "Cancele quando quiser",
    "Atualizações automáticas",
    "Conformidade com a LGPD",
];

/// Headline price for a plan card plus, for yearly billing, the charged total
fn price_label(plan: &Plan, cycle: BillingCycle) -> (String, Option<String>) {
    match cycle {
        BillingCycle::Monthly => (format!("{}/mês", format_brl(plan.monthly_cents)), None),
        BillingCycle::Yearly => (
            format!(
                "{}/mês",
                format_brl(monthly_equivalent_cents(plan.yearly_cents))
            ),
            Some(format!("Total: {} / ano", format_brl(plan.yearly_cents))),
        ),
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let (cycle, set_cycle) = signal(BillingCycle::default());
    let (selected, set_selected) = signal(PlanId::default());
    let (loading, set_loading) = signal(false);

    let submit = move |_: leptos::ev::MouseEvent| {
        let plan = selected.get_untracked();
        let billing_cycle = cycle.get_untracked();
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            let result = api::create_checkout_session(plan, billing_cycle)
                .await
                .and_then(|session| {
                    session
                        .url
                        .ok_or_else(|| "Sessão de checkout sem URL de pagamento".to_string())
                })
                .and_then(|url| api::redirect(&url));

            if let Err(e) = result {
                leptos::logging::error!("Checkout failed: {}", e);
                api::alert(&format!("Erro ao processar pagamento: {e}"));
                set_loading.set(false);
            }
        });
    };

    view! {
        <div class="checkout">
            <header class="section-header">
                <a href="/" class="back">"← Voltar"</a>
                <h1>"Escolha seu plano"</h1>
                <p class="subtitle">"Comece a emitir NFS-e hoje mesmo"</p>
            </header>

            <div class="cycle-toggle">
                <button
                    class="toggle"
                    class:active=move || cycle.get() == BillingCycle::Monthly
                    on:click=move |_| set_cycle.set(BillingCycle::Monthly)
                >
                    "Mensal"
                </button>
                <button
                    class="toggle"
                    class:active=move || cycle.get() == BillingCycle::Yearly
                    on:click=move |_| set_cycle.set(BillingCycle::Yearly)
                >
                    "Anual " <span class="discount">"(-17%)"</span>
                </button>
            </div>

            <div class="plans">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let id = plan.id;
                        view! {
                            <div
                                class="plan card"
                                class:featured=plan.recommended
                                class:selected=move || selected.get() == id
                                on:click=move |_| set_selected.set(id)
                            >
                                {plan
                                    .recommended
                                    .then(|| view! { <span class="badge badge-popular">"Mais popular"</span> })}
                                <h2>{plan.name}</h2>
                                <p class="plan-description">{plan.description}</p>
                                {move || {
                                    let (price, total) = price_label(id.plan(), cycle.get());
                                    view! {
                                        <div class="price">{price}</div>
                                        {total.map(|t| view! { <small class="yearly-total">{t}</small> })}
                                    }
                                }}
                                <ul>
                                    {plan.features.iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect_view()}
                                </ul>
                                <span class="select-label">
                                    {move || if selected.get() == id { "Selecionado" } else { "Selecionar" }}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="payment card">
                <h3>"Formas de pagamento"</h3>
                <ul class="payment-methods">
                    <li>"💳 Cartão de crédito"</li>
                    <li>"💳 Cartão de débito"</li>
                    <li>"⚡ PIX"</li>
                </ul>
                <p class="secure-note">"🔒 Pagamento 100% seguro processado pelo Stripe"</p>

                <button
                    class="btn btn-primary btn-lg"
                    disabled=move || loading.get()
                    on:click=submit
                >
                    {move || if loading.get() { "Processando..." } else { "Continuar para pagamento" }}
                </button>
            </div>

            <div class="included">
                <h3>"Incluído em todos os planos"</h3>
                <ul>
                    {INCLUDED.iter().map(|item| view! { <li>"✓ " {*item}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
