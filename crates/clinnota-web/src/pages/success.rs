//! Post-payment landing page

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

const NEXT_STEPS: [&str; 3] = [
    "Você receberá um e-mail de confirmação com os detalhes da assinatura",
    "Baixe o aplicativo e faça login com o e-mail usado no pagamento",
    "Cadastre seu emissor e emita sua primeira NFS-e",
];

#[component]
pub fn SuccessPage() -> impl IntoView {
    let query = use_query_map();
    let session_id = move || query.read().get("session_id");

    view! {
        <div class="success">
            <div class="card success-card pop">
                <div class="success-icon">"✅"</div>
                <h1>"Pagamento confirmado!"</h1>
                <p>"Sua assinatura do ClinNota está ativa. Obrigado pela confiança."</p>

                <h3>"Próximos passos"</h3>
                <ol class="next-steps">
                    {NEXT_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                </ol>

                {move || {
                    session_id()
                        .map(|id| view! { <small class="session-ref">"Referência: " {id}</small> })
                }}

                <div class="cta">
                    <a href="/#downloads" class="btn btn-primary">"Baixar o aplicativo"</a>
                    <a href="/" class="btn btn-outline">"Voltar ao início"</a>
                </div>
            </div>
        </div>
    }
}
