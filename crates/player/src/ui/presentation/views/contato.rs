//! Contact page
//!
//! The site has no contact endpoint. Submitting acknowledges locally and
//! clears the form.

use dioxus::prelude::*;

use crate::presentation::components::common::Banner;
use crate::use_platform;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ContactMessage {
    nome: String,
    email: String,
    assunto: String,
    telefone: String,
    mensagem: String,
}

#[component]
pub fn ContatoView() -> Element {
    let platform = use_platform();
    let mut message = use_signal(ContactMessage::default);
    let mut acknowledged = use_signal(|| false);

    let current = message.read().clone();

    rsx! {
        Banner {}
        section {
            class: "contact",
            form {
                class: "contact-form",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let assunto = message.read().assunto.clone();
                    platform.log_info(&format!("Contact form submitted: {}", assunto));
                    message.set(ContactMessage::default());
                    acknowledged.set(true);
                },
                input {
                    r#type: "text",
                    placeholder: "Nome",
                    value: "{current.nome}",
                    oninput: move |e| message.write().nome = e.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "E-mail",
                    value: "{current.email}",
                    oninput: move |e| message.write().email = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Assunto",
                    value: "{current.assunto}",
                    oninput: move |e| message.write().assunto = e.value(),
                }
                input {
                    r#type: "tel",
                    placeholder: "Telefone",
                    value: "{current.telefone}",
                    oninput: move |e| message.write().telefone = e.value(),
                }
                textarea {
                    placeholder: "Mensagem",
                    value: "{current.mensagem}",
                    oninput: move |e| message.write().mensagem = e.value(),
                }
                button { r#type: "submit", class: "btn-primary", "Enviar" }
                if *acknowledged.read() {
                    p { class: "form-success", "Mensagem enviada. Obrigado pelo contato!" }
                }
            }
        }
    }
}
