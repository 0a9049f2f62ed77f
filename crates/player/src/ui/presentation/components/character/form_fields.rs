//! Character form inputs, shared by the create panel and the edit modal
//!
//! The component only renders a [`CharacterForm`] and reports edits; the
//! owner applies them and performs the submit.

use dioxus::prelude::*;

use dunder_domain::{ImageUpload, MAX_DESCRIPTION_CHARS};

use crate::presentation::state::{CharacterForm, FormEdit};
use crate::use_platform;

/// Props for CharacterFormFields
#[derive(Props, Clone, PartialEq)]
pub struct CharacterFormFieldsProps {
    pub form: CharacterForm,
    pub on_edit: EventHandler<FormEdit>,
    pub on_submit: EventHandler<()>,
    /// Shown as a secondary button when set
    #[props(default)]
    pub on_cancel: Option<EventHandler<()>>,
    #[props(default)]
    pub is_saving: bool,
    #[props(default)]
    pub error: Option<String>,
}

#[component]
pub fn CharacterFormFields(props: CharacterFormFieldsProps) -> Element {
    let platform = use_platform();
    let form = &props.form;
    let on_edit = props.on_edit;
    let on_submit = props.on_submit;
    let remaining = form.remaining_chars();
    let file_selection = form.file_selection();
    let submit_label = if form.is_editing() {
        "Salvar alterações"
    } else {
        "Cadastrar personagem"
    };

    rsx! {
        form {
            class: "character-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(());
            },

            if let Some(err) = props.error.as_ref() {
                div { class: "form-error", "{err}" }
            }

            label { r#for: "character-nome", "Nome" }
            input {
                id: "character-nome",
                r#type: "text",
                value: "{form.name()}",
                oninput: move |e| on_edit.call(FormEdit::Name(e.value())),
                placeholder: "Nome do personagem",
            }

            label { r#for: "character-descricao", "Descrição" }
            textarea {
                id: "character-descricao",
                value: "{form.description()}",
                maxlength: "{MAX_DESCRIPTION_CHARS}",
                oninput: move |e| on_edit.call(FormEdit::Description(e.value())),
                placeholder: "Descrição do personagem",
                rows: 5,
            }
            span { class: "char-counter", "{remaining} caracteres restantes" }

            label { r#for: "character-foto", "Foto" }
            // a new key gives an empty native picker after a reset
            for generation in std::iter::once(file_selection) {
                input {
                    key: "{generation}",
                    id: "character-foto",
                    r#type: "file",
                    accept: "image/*",
                    onchange: {
                        let platform = platform.clone();
                        move |e: FormEvent| {
                            let platform = platform.clone();
                            async move {
                                let Some(file) = e.files().into_iter().next() else {
                                    on_edit.call(FormEdit::Image(None));
                                    return;
                                };
                                let file_name = file.name();
                                match file.read_bytes().await {
                                    Ok(bytes) => on_edit.call(FormEdit::Image(Some(
                                        ImageUpload::from_file_name(file_name, bytes.to_vec()),
                                    ))),
                                    Err(e) => platform.log_warn(&format!(
                                        "Could not read picked image {}: {}",
                                        file_name, e
                                    )),
                                }
                            }
                        }
                    },
                }
            }

            div {
                class: "form-actions",
                if let Some(on_cancel) = props.on_cancel {
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: props.is_saving,
                    if props.is_saving { "Salvando..." } else { "{submit_label}" }
                }
            }
        }
    }
}
