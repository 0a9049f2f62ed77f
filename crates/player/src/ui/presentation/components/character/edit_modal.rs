//! Edit modal on the cadastro page
//!
//! Renders whatever [`EditModal`] holds. The owner opens it; this component
//! runs the update and closes on success.

use dioxus::prelude::*;

use crate::presentation::components::character::CharacterFormFields;
use crate::presentation::components::common::ModalOverlay;
use crate::presentation::services::use_character_service;
use crate::presentation::state::{EditModal, FormEdit, RefreshToggle};

#[component]
pub fn EditCharacterModal(modal: Signal<EditModal>, refresh: Signal<RefreshToggle>) -> Element {
    let character_service = use_character_service();

    let mut modal = modal;
    let mut is_saving = use_signal(|| false);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    let submit = move |_| {
        if *is_saving.read() {
            return;
        }
        let (id, prepared) = match modal.read().form() {
            Some(form) => match form.editing_id() {
                Some(id) => (id.clone(), form.prepare()),
                None => return,
            },
            None => return,
        };
        let submission = match prepared {
            Ok(submission) => submission,
            Err(e) => {
                error_message.set(Some(e.to_string()));
                return;
            }
        };
        error_message.set(None);
        is_saving.set(true);

        let svc = character_service.clone();
        let mut refresh = refresh;
        spawn(async move {
            let result = svc.submit(&submission).await;
            modal.write().complete_submit(&id, &result, &mut refresh.write());
            is_saving.set(false);
        });
    };

    let mut close = move || {
        error_message.set(None);
        modal.write().close();
    };

    let body = match &*modal.read() {
        EditModal::Closed => return rsx! {},
        EditModal::Loading(_) => rsx! {
            p { class: "modal-loading", "Carregando..." }
        },
        EditModal::Open(form) => rsx! {
            CharacterFormFields {
                form: form.clone(),
                on_edit: move |edit: FormEdit| {
                    if let Some(form) = modal.write().form_mut() {
                        form.apply(edit);
                    }
                },
                on_submit: submit,
                on_cancel: move |_| close(),
                is_saving: *is_saving.read(),
                error: error_message.read().clone(),
            }
        },
    };

    rsx! {
        ModalOverlay {
            title: "Editar personagem".to_string(),
            on_backdrop_click: move |is_backdrop: bool| {
                if is_backdrop {
                    error_message.set(None);
                }
                modal.write().backdrop_click(is_backdrop);
            },
            on_dismiss: move |_| close(),
            {body}
        }
    }
}
