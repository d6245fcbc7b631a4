//! Downloads section

use leptos::prelude::*;

struct Platform {
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    downloads: &'static str,
    features: [&'static str; 3],
    popular: bool,
}

const PLATFORMS: [Platform; 3] = [
    Platform {
        icon: "🤖",
        title: "Google Play",
        subtitle: "Android 8.0+",
        description: "App nativo com sincronização em tempo real",
        downloads: "10k+",
        features: ["Segurança criptografada", "Push notifications", "Sync automática"],
        popular: false,
    },
    Platform {
        icon: "🍎",
        title: "App Store",
        subtitle: "iOS 14.0+",
        description: "Interface otimizada para iPhone",
        downloads: "8k+",
        features: ["Interface adaptativa", "Acessibilidade avançada", "Widgets iOS"],
        popular: false,
    },
    Platform {
        icon: "💻",
        title: "Desktop",
        subtitle: "Windows",
        description: "Versão completa com recursos avançados e integração com sistemas",
        downloads: "25k+",
        features: ["Recursos completos", "Integração APIs", "Multi-monitor"],
        popular: true,
    },
];

const TOTALS: [(&str, &str); 3] = [
    ("Downloads totais", "50k+"),
    ("Avaliação média", "4.9★"),
    ("Empresas ativas", "12k+"),
];

#[component]
pub fn Downloads() -> impl IntoView {
    view! {
        <section id="downloads" class="downloads">
            <header class="section-header reveal">
                <span class="badge">"📲 Downloads"</span>
                <h2>"Use o ClinNota onde estiver"</h2>
            </header>

            <div class="cards">
                {PLATFORMS
                    .iter()
                    .map(|platform| {
                        view! {
                            <article class="card platform reveal" class:featured=platform.popular>
                                {platform.popular.then(|| view! { <span class="badge badge-popular">"Popular"</span> })}
                                <div class="card-icon">{platform.icon}</div>
                                <h3>{platform.title}</h3>
                                <small>{platform.subtitle}</small>
                                <p>{platform.description}</p>
                                <ul>
                                    {platform.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                                <div class="platform-footer">
                                    <span>{platform.downloads} " downloads"</span>
                                    <a href="#" class="btn">"Baixar"</a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="stats">
                {TOTALS
                    .iter()
                    .map(|(label, value)| {
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
