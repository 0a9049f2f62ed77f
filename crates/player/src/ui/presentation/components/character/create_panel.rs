//! Create form on the cadastro page
//!
//! Holds its own [`CharacterForm`]. A successful create flips the shared
//! refresh toggle so the table below reloads.

use dioxus::prelude::*;

use crate::presentation::components::character::CharacterFormFields;
use crate::presentation::services::use_character_service;
use crate::presentation::state::{CharacterForm, FormEdit, RefreshToggle};

#[component]
pub fn CreateCharacterPanel(refresh: Signal<RefreshToggle>) -> Element {
    let character_service = use_character_service();

    let mut form = use_signal(CharacterForm::new);
    let mut is_saving = use_signal(|| false);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    let submit = move |_| {
        if *is_saving.read() {
            return;
        }
        let submission = match form.read().prepare() {
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
            form.write().complete(&result, &mut refresh.write());
            is_saving.set(false);
        });
    };

    rsx! {
        section {
            class: "cadastro-form",
            h2 { "Cadastrar personagem" }
            CharacterFormFields {
                form: form.read().clone(),
                on_edit: move |edit: FormEdit| form.write().apply(edit),
                on_submit: submit,
                is_saving: *is_saving.read(),
                error: error_message.read().clone(),
            }
        }
    }
}
