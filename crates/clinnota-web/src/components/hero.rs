//! Hero section

use leptos::prelude::*;

const HERO_BADGES: [(&str, &str); 3] = [
    ("⚡", "Emissão em 10 segundos"),
    ("🛡️", "Certificação ICP-Brasil"),
    ("✅", "Sistema nacional"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content reveal">
                <span class="badge">"✨ Integração nacional com a Receita Federal"</span>

                <h1>
                    <span class="line">"Emita NFS-e em"</span>
                    <span class="line gradient-text shimmer">"segundos"</span>
                    <span class="line muted">"com o ClinNota"</span>
                </h1>

                <p class="lead">
                    "A plataforma mais completa para prestadores de serviço que buscam "
                    <strong class="indigo">"agilidade"</strong> ", "
                    <strong class="violet">"segurança"</strong> " e "
                    <strong class="purple">"conformidade"</strong>
                    " na emissão de notas fiscais."
                </p>

                <div class="hero-stats">
                    <span class="stars">"★★★★★"</span>
                    <span>"4.9 (2.3k avaliações)"</span>
                    <span>"50k+ empresas ativas"</span>
                </div>

                <div class="cta">
                    <a href="/checkout" class="btn btn-primary btn-lg">"Começar gratuitamente"</a>
                    <a href="#how-it-works" class="btn btn-outline btn-lg">"Ver demonstração"</a>
                </div>

                <ul class="hero-badges">
                    {HERO_BADGES
                        .iter()
                        .map(|(icon, text)| view! { <li class="pop"><span>{*icon}</span>{*text}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="hero-mockup float">
                <div class="mockup-window">
                    <div class="mockup-header">
                        <span class="dot"></span><span class="dot"></span><span class="dot"></span>
                        <span class="mockup-title">"ClinNota"</span>
                    </div>
                    <div class="mockup-stats">
                        <div><strong>"128"</strong><small>"NFS-e no mês"</small></div>
                        <div><strong>"R$ 48k"</strong><small>"faturado"</small></div>
                    </div>
                    <div class="mockup-row">"NFS-e #000128 · Autorizada"</div>
                </div>
            </div>
        </section>
    }
}
