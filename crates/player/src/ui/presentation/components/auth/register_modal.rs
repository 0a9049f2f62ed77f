//! Register-user modal

use dioxus::prelude::*;

use crate::presentation::components::common::ModalOverlay;
use crate::presentation::services::use_auth_service;
use crate::presentation::state::RegisterForm;

/// Props for RegisterModal
#[derive(Props, Clone, PartialEq)]
pub struct RegisterModalProps {
    pub on_close: EventHandler<()>,
    /// Fired after the account was created, before closing
    pub on_registered: EventHandler<()>,
}

#[component]
pub fn RegisterModal(props: RegisterModalProps) -> Element {
    let auth_service = use_auth_service();

    let mut form = use_signal(RegisterForm::new);
    let mut is_saving = use_signal(|| false);
    let on_close = props.on_close;
    let on_registered = props.on_registered;

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if *is_saving.read() {
            return;
        }
        let current = form.read().clone();
        let svc = auth_service.clone();
        is_saving.set(true);
        spawn(async move {
            let result = svc
                .register_user(&current.nome, &current.email, &current.senha)
                .await;
            let done = form.write().apply_result(result);
            is_saving.set(false);
            if done {
                on_registered.call(());
                on_close.call(());
            }
        });
    };

    let current = form.read().clone();

    rsx! {
        ModalOverlay {
            title: "Cadastrar".to_string(),
            on_backdrop_click: move |is_backdrop: bool| {
                if is_backdrop {
                    on_close.call(());
                }
            },
            on_dismiss: move |_| on_close.call(()),

            form {
                class: "modal-form",
                onsubmit: submit,
                input {
                    r#type: "text",
                    placeholder: "Nome",
                    value: "{current.nome}",
                    oninput: move |e| form.write().nome = e.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "E-mail",
                    value: "{current.email}",
                    oninput: move |e| form.write().email = e.value(),
                }
                input {
                    r#type: "password",
                    placeholder: "Senha",
                    value: "{current.senha}",
                    oninput: move |e| form.write().senha = e.value(),
                }
                if let Some(err) = current.error() {
                    p { class: "form-error", "{err}" }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: *is_saving.read(),
                        "Cadastrar"
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
}
