//! Features section with category tabs

use leptos::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
    highlights: [&'static str; 3],
}

struct Category {
    label: &'static str,
    features: [Feature; 2],
}

const CATEGORIES: [Category; 3] = [
    Category {
        label: "Configuração",
        features: [
            Feature {
                title: "Cadastro Inteligente do Prestador",
                description: "Configure seus dados fiscais uma única vez com validação automática de CNPJ, inscrição municipal e certificado digital",
                highlights: ["Validação automática", "Backup na nuvem", "Assinatura digital integrada"],
            },
            Feature {
                title: "Integração Nacional Avançada",
                description: "Conexão direta com a Receita Federal para emissão de NFS-e nacional com validação automática",
                highlights: ["Sistema nacional", "Receita Federal", "Validação automática"],
            },
        ],
    },
    Category {
        label: "Emissão",
        features: [
            Feature {
                title: "Catálogo de Serviços Inteligente",
                description: "Gerencie serviços com códigos CNAE, tributação automática e sugestões baseadas em IA",
                highlights: ["IA para tributação", "Códigos CNAE", "Templates personalizados"],
            },
            Feature {
                title: "Assinatura e Transmissão Segura",
                description: "Assinatura digital ICP-Brasil automática e transmissão criptografada para a Receita Federal",
                highlights: ["ICP-Brasil", "Transmissão segura", "Conformidade nacional"],
            },
        ],
    },
    Category {
        label: "Gestão",
        features: [
            Feature {
                title: "Histórico e Relatórios Avançados",
                description: "Dashboard completo com analytics, exportação em múltiplos formatos e sincronização contábil",
                highlights: ["Dashboard analytics", "Múltiplos formatos", "Sync contábil"],
            },
            Feature {
                title: "Suporte Premium e Atualizações",
                description: "Suporte técnico especializado 24/7, atualizações automáticas e treinamento incluído",
                highlights: ["Suporte 24/7", "Treinamento incluído", "Updates automáticos"],
            },
        ],
    },
];

const BENEFITS: [&str; 6] = [
    "Redução de 90% no tempo de emissão",
    "100% de conformidade fiscal garantida",
    "Integração com sistemas contábeis",
    "Backup automático na nuvem",
    "Interface responsiva e intuitiva",
    "Relatórios gerenciais avançados",
];

#[component]
pub fn Features() -> impl IntoView {
    let (active, set_active) = signal(0_usize);

    view! {
        <section id="features" class="features">
            <header class="section-header reveal">
                <span class="badge">"🚀 Recursos"</span>
                <h2>"Tudo o que você precisa para emitir NFS-e"</h2>
            </header>

            <div class="tabs" role="tablist">
                {CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(index, category)| {
                        view! {
                            <button
                                class="tab"
                                role="tab"
                                class:active=move || active.get() == index
                                on:click=move |_| set_active.set(index)
                            >
                                {category.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="tab-panel">
                {move || {
                    CATEGORIES[active.get()]
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <article class="card reveal">
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                    <ul class="chips">
                                        {feature
                                            .highlights
                                            .iter()
                                            .map(|h| view! { <li>{*h}</li> })
                                            .collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <ul class="benefits">
                {BENEFITS.iter().map(|b| view! { <li>"✓ " {*b}</li> }).collect_view()}
            </ul>
        </section>
    }
}
