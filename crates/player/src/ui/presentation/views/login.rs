//! Login page with the register and password recovery modals

use dioxus::prelude::*;

use crate::presentation::components::auth::{ForgotPasswordModal, RegisterModal};
use crate::presentation::components::common::Banner;
use crate::presentation::services::{use_auth_service, use_session_gate};
use crate::presentation::state::register::MSG_REGISTER_SUCCESS;
use crate::presentation::state::LoginForm;
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginModal {
    Register,
    ForgotPassword,
}

#[component]
pub fn LoginView() -> Element {
    let auth_service = use_auth_service();
    let gate = use_session_gate();
    let navigator = use_navigator();

    let mut form = use_signal(LoginForm::new);
    let mut is_submitting = use_signal(|| false);
    let mut open_modal: Signal<Option<LoginModal>> = use_signal(|| None);
    let mut notice: Signal<Option<&'static str>> = use_signal(|| None);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if *is_submitting.read() || form.write().validate().is_err() {
            return;
        }
        let (email, password) = {
            let current = form.read();
            (current.email.clone(), current.password.clone())
        };
        let svc = auth_service.clone();
        let gate = gate.clone();
        is_submitting.set(true);
        spawn(async move {
            let result = svc.login(&email, &password).await;
            let authenticated = form.write().apply_result(result);
            is_submitting.set(false);
            if authenticated {
                gate.set_authenticated(true);
                navigator.replace(Route::CadastroRoute {});
            }
        });
    };

    let current = form.read().clone();
    let password_type = if current.show_password { "text" } else { "password" };

    rsx! {
        Banner {}
        section {
            class: "login",
            form {
                class: "login-form",
                onsubmit: submit,
                h1 { "Login" }
                if let Some(err) = current.error() {
                    p { class: "form-error", "{err}" }
                }
                if let Some(msg) = *notice.read() {
                    p { class: "form-success", "{msg}" }
                }
                input {
                    r#type: "text",
                    placeholder: "Login",
                    value: "{current.email}",
                    oninput: move |e| form.write().email = e.value(),
                }
                div {
                    class: "password-wrapper",
                    input {
                        r#type: password_type,
                        placeholder: "Senha",
                        value: "{current.password}",
                        oninput: move |e| form.write().password = e.value(),
                    }
                    button {
                        r#type: "button",
                        class: "toggle-password",
                        onclick: move |_| form.write().toggle_password_visibility(),
                        if current.show_password { "Esconder" } else { "Mostrar" }
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: *is_submitting.read(),
                    "Entrar"
                }
                div {
                    class: "login-links",
                    a {
                        href: "#",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            open_modal.set(Some(LoginModal::Register));
                        },
                        "Fazer cadastro"
                    }
                    a {
                        href: "#",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            open_modal.set(Some(LoginModal::ForgotPassword));
                        },
                        "Esqueceu a senha?"
                    }
                }
            }
        }

        {
            match *open_modal.read() {
                Some(LoginModal::Register) => rsx! {
                    RegisterModal {
                        on_close: move |_| open_modal.set(None),
                        on_registered: move |_| notice.set(Some(MSG_REGISTER_SUCCESS)),
                    }
                },
                Some(LoginModal::ForgotPassword) => rsx! {
                    ForgotPasswordModal { on_close: move |_| open_modal.set(None) }
                },
                None => rsx! {},
            }
        }
    }
}
