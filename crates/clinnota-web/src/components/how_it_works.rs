//! How-it-works section

use leptos::prelude::*;

struct Step {
    number: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    details: [&'static str; 3],
    time: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Cadastre seu emissor",
        subtitle: "Configuração inicial",
        description: "Configure seus dados fiscais, certificado digital e informações do prestador em minutos",
        details: ["CNPJ e dados fiscais", "Certificado ICP-Brasil", "Informações tributárias"],
        time: "5 min",
    },
    Step {
        number: "02",
        title: "Configure a integração",
        subtitle: "Sistema nacional",
        description: "Ative a integração com a Receita Federal para emissão nacional de NFS-e",
        details: ["Sistema nacional", "Receita Federal", "Configuração automática"],
        time: "2 min",
    },
    Step {
        number: "03",
        title: "Adicione serviços",
        subtitle: "Catálogo inteligente",
        description: "Cadastre seus serviços com códigos CNAE e tributação",
        details: ["Códigos CNAE automáticos", "Tributação inteligente", "Templates personalizados"],
        time: "3 min",
    },
    Step {
        number: "04",
        title: "Assine e envie",
        subtitle: "Processo automatizado",
        description: "Gere, assine digitalmente e transmita suas notas fiscais com um clique",
        details: ["Assinatura automática", "Transmissão segura", "Confirmação instantânea"],
        time: "10 seg",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <header class="section-header reveal">
                <span class="badge">"⚙️ Como funciona"</span>
                <h2>"Do cadastro à primeira nota em minutos"</h2>
            </header>

            <ol class="steps">
                {STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <li class="step reveal">
                                <span class="step-number">{step.number}</span>
                                <small class="step-subtitle">{step.subtitle}</small>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                                <ul>
                                    {step.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                                </ul>
                                <span class="step-time">"⏱ " {step.time}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="cta">
                <a href="/checkout" class="btn btn-primary btn-lg">"Começar agora"</a>
            </div>
        </section>
    }
}
