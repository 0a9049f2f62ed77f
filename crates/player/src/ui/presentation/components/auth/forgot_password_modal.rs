//! Password recovery modal
//!
//! There is no recovery endpoint. The modal only collects an address and
//! closes.

use dioxus::prelude::*;

use crate::presentation::components::common::ModalOverlay;

#[component]
pub fn ForgotPasswordModal(on_close: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);

    rsx! {
        ModalOverlay {
            title: "Recuperar Senha".to_string(),
            on_backdrop_click: move |is_backdrop: bool| {
                if is_backdrop {
                    on_close.call(());
                }
            },
            on_dismiss: move |_| on_close.call(()),

            p { "Insira seu e-mail para recuperar a senha." }
            input {
                r#type: "email",
                placeholder: "Seu e-mail",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            div {
                class: "form-actions",
                button {
                    r#type: "button",
                    class: "btn-primary",
                    onclick: move |_| {
                        tracing::info!("Password recovery requested");
                        on_close.call(());
                    },
                    "Enviar"
                }
                button {
                    r#type: "button",
                    class: "btn-secondary",
                    onclick: move |_| on_close.call(()),
                    "Cancelar"
                }
            }
        }
    }
}
