//! Character table on the cadastro page
//!
//! Loads on mount and after every refresh flip. Delete goes to the server and
//! then flips the toggle; the row disappears with the next fetch.

use dioxus::prelude::*;

use dunder_domain::CharacterId;

use crate::presentation::services::{use_api_config, use_character_service};
use crate::presentation::state::{CharacterListState, RefreshToggle};

#[component]
pub fn CharacterTable(refresh: Signal<RefreshToggle>, on_edit: EventHandler<CharacterId>) -> Element {
    let character_service = use_character_service();
    let config = use_api_config();

    let mut list = use_signal(CharacterListState::new);

    {
        let svc = character_service.clone();
        use_effect(move || {
            let toggle = *refresh.read();
            if !list.write().begin_reload(&toggle) {
                return;
            }
            let generation = toggle.generation();
            let svc = svc.clone();
            spawn(async move {
                let result = svc.list_characters().await;
                list.write().apply_fetch(generation, result);
            });
        });
    }

    let on_delete = use_callback(move |id: CharacterId| {
        let svc = character_service.clone();
        let mut refresh = refresh;
        spawn(async move {
            let result = svc.delete_character(&id).await;
            list.write().apply_delete(&id, result, &mut refresh.write());
        });
    });

    let characters = list.read().characters().to_vec();

    rsx! {
        section {
            class: "character-table",
            h2 { "Personagens cadastrados" }
            if characters.is_empty() {
                p { class: "empty", "Nenhum personagem cadastrado." }
            }
            table {
                thead {
                    tr {
                        th { "Foto" }
                        th { "Nome" }
                        th { "Descrição" }
                        th { "Ações" }
                    }
                }
                tbody {
                    for character in characters {
                        tr {
                            key: "{character.id}",
                            td {
                                if let Some(foto) = character.foto.as_ref() {
                                    img { src: config.upload_url(foto), alt: "{character.nome}" }
                                }
                            }
                            td { "{character.nome}" }
                            td { "{character.descricao}" }
                            td {
                                button {
                                    class: "btn-secondary",
                                    onclick: {
                                        let id = character.id.clone();
                                        move |_| on_edit.call(id.clone())
                                    },
                                    "Editar"
                                }
                                button {
                                    class: "btn-danger",
                                    onclick: {
                                        let id = character.id.clone();
                                        move |_| on_delete.call(id.clone())
                                    },
                                    "Excluir"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
