//! Contact section: form, contact methods, opening hours and FAQ

use leptos::prelude::*;

use crate::forms::{ContactForm, Field, FormErrors, mask_phone};

const CONTACT_METHODS: [(&str, &str, &str, &str); 3] = [
    ("✉️", "E-mail", "contato@clinnota.com.br", "Resposta em até 4 horas"),
    ("📞", "Telefone", "(11) 3000-0000", "Seg à Sex, 9h às 18h"),
    ("💬", "Chat online", "Disponível no app", "Resposta imediata"),
];

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Segunda à Sexta:", "9h às 18h"),
    ("Sábado:", "9h às 13h"),
    ("Domingo:", "Fechado"),
];

const FAQ: [(&str, &str); 6] = [
    (
        "Preciso de conta para usar o ClinNota?",
        "Sim, é necessário criar uma conta gratuita para sincronizar seus dados entre dispositivos e manter seu histórico de notas fiscais seguro na nuvem. O cadastro é simples e leva menos de 2 minutos.",
    ),
    (
        "Como funciona a emissão nacional de NFS-e?",
        "O ClinNota utiliza o sistema nacional de NFS-e da Receita Federal, permitindo emissão válida em todo território brasileiro. Não há limitações por município ou estado.",
    ),
    (
        "Tem plano grátis ou período de teste?",
        "Oferecemos um período de teste gratuito de 30 dias com acesso completo a todos os recursos. Após este período, temos planos a partir de R$ 29,90/mês, com descontos para pagamento anual.",
    ),
    (
        "Como funciona a integração com sistemas contábeis?",
        "O ClinNota oferece integração nativa com os principais sistemas contábeis do mercado através de APIs e exportação automatizada.",
    ),
    (
        "Os dados ficam seguros na nuvem?",
        "Sim, utilizamos criptografia de ponta a ponta e servidores certificados no Brasil, com backups automáticos diários e conformidade total com a LGPD.",
    ),
    (
        "Qual o suporte oferecido?",
        "Suporte técnico especializado via chat, e-mail e telefone durante horário comercial. Clientes dos planos premium têm suporte prioritário 24/7.",
    ),
];

/// Accordion transition: clicking the open item closes it, anything else opens
/// only the clicked item.
pub const fn toggle_item(open: Option<usize>, clicked: usize) -> Option<usize> {
    match open {
        Some(current) if current == clicked => None,
        _ => Some(clicked),
    }
}

#[component]
fn FieldError(errors: ReadSignal<FormErrors>, field: Field) -> impl IntoView {
    move || {
        errors
            .get()
            .get(field)
            .map(|message| view! { <span class="field-error">{message}</span> })
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (errors, set_errors) = signal(FormErrors::default());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.get_untracked().validate();
        if result.is_empty() {
            set_form.set(ContactForm::default());
            set_sent.set(true);
        } else {
            set_sent.set(false);
        }
        set_errors.set(result);
    };

    view! {
        <form class="contact-form card" on:submit=on_submit novalidate=true>
            <Show when=move || sent.get()>
                <div class="form-success pop">
                    "✅ Mensagem enviada! Retornaremos em breve."
                </div>
            </Show>

            <div class="form-row">
                <label>
                    "Nome completo *"
                    <input
                        type="text"
                        placeholder="Como podemos te chamar?"
                        prop:value=move || form.get().name
                        on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError errors=errors field=Field::Name />
                </label>
                <label>
                    "E-mail *"
                    <input
                        type="text"
                        placeholder="seu@email.com.br"
                        prop:value=move || form.get().email
                        on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError errors=errors field=Field::Email />
                </label>
            </div>

            <div class="form-row">
                <label>
                    "Empresa"
                    <input
                        type="text"
                        placeholder="Nome da sua empresa"
                        prop:value=move || form.get().company
                        on:input=move |ev| set_form.update(|f| f.company = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Telefone"
                    <input
                        type="tel"
                        placeholder="(11) 99999-9999"
                        prop:value=move || form.get().phone
                        on:input=move |ev| {
                            set_form.update(|f| f.phone = mask_phone(&event_target_value(&ev)));
                        }
                    />
                    <FieldError errors=errors field=Field::Phone />
                </label>
            </div>

            <label>
                "Assunto *"
                <input
                    type="text"
                    placeholder="Sobre o que você gostaria de falar?"
                    prop:value=move || form.get().subject
                    on:input=move |ev| set_form.update(|f| f.subject = event_target_value(&ev))
                />
                <FieldError errors=errors field=Field::Subject />
            </label>

            <label>
                "Mensagem *"
                <textarea
                    rows="5"
                    placeholder="Descreva sua dúvida, necessidade ou sugestão."
                    prop:value=move || form.get().message
                    on:input=move |ev| set_form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <FieldError errors=errors field=Field::Message />
            </label>

            <button type="submit" class="btn btn-primary">"Enviar mensagem"</button>
        </form>
    }
}

#[component]
fn FaqList() -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <div class="faq">
            <h3>"Perguntas frequentes"</h3>
            {FAQ
                .iter()
                .enumerate()
                .map(|(index, &(question, answer))| {
                    view! {
                        <div class="faq-item" class:open=move || open.get() == Some(index)>
                            <button
                                class="faq-question"
                                on:click=move |_| set_open.update(|o| *o = toggle_item(*o, index))
                            >
                                <span>{question}</span>
                                <span class="chevron">"⌄"</span>
                            </button>
                            <Show when=move || open.get() == Some(index)>
                                <p class="faq-answer">{answer}</p>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <header class="section-header reveal">
                <span class="badge">"💬 Contato"</span>
                <h2>"Fale com a gente"</h2>
            </header>

            <div class="contact-grid">
                <ContactFormView />

                <aside class="contact-side">
                    {CONTACT_METHODS
                        .iter()
                        .map(|(icon, title, value, note)| {
                            view! {
                                <div class="card contact-method">
                                    <span class="card-icon">{*icon}</span>
                                    <div>
                                        <h4>{*title}</h4>
                                        <strong>{*value}</strong>
                                        <small>{*note}</small>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}

                    <div class="card hours">
                        <h4>"🕘 Horário de atendimento"</h4>
                        {OPENING_HOURS
                            .iter()
                            .map(|(day, hours)| {
                                view! {
                                    <div class="hours-row">
                                        <span>{*day}</span>
                                        <span>{*hours}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </aside>
            </div>

            <FaqList />
        </section>
    }
}
