//! Highlights section

use leptos::prelude::*;

struct Highlight {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    metric: &'static str,
    metric_label: &'static str,
    tone: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "⚡",
        title: "Velocidade extraordinária",
        description: "Emita suas NFS-e em menos de 10 segundos com validação automática",
        metric: "10s",
        metric_label: "tempo médio",
        tone: "amber",
    },
    Highlight {
        icon: "🛡️",
        title: "Segurança empresarial",
        description: "Certificação ICP-Brasil, criptografia avançada e conformidade total",
        metric: "100%",
        metric_label: "seguro",
        tone: "emerald",
    },
    Highlight {
        icon: "📱",
        title: "Experiência unificada",
        description: "Sincronização perfeita entre Desktop, Android e iOS com dados na nuvem",
        metric: "3",
        metric_label: "plataformas",
        tone: "blue",
    },
];

const STATS: [(&str, &str); 3] = [
    ("50k+", "empresas ativas"),
    ("2.5M+", "NFS-e emitidas"),
    ("99.9%", "uptime garantido"),
];

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="highlights">
            <div class="cards">
                {HIGHLIGHTS
                    .iter()
                    .map(|h| {
                        view! {
                            <article class=format!("card reveal tone-{}", h.tone)>
                                <div class="card-icon">{h.icon}</div>
                                <div class="metric">
                                    <strong>{h.metric}</strong>
                                    <small>{h.metric_label}</small>
                                </div>
                                <h3>{h.title}</h3>
                                <p>{h.description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="stats">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat">
                                <strong>{*value}</strong>
                                <span>{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
