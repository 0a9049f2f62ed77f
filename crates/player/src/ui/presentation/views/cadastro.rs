//! Character management page
//!
//! Create form, table and edit modal share one refresh toggle. The table
//! reloads whenever either form reports a successful write.

use dioxus::prelude::*;

use dunder_domain::CharacterId;

use crate::presentation::components::character::{
    CharacterTable, CreateCharacterPanel, EditCharacterModal,
};
use crate::presentation::components::common::Banner;
use crate::presentation::services::{use_character_service, use_session_gate};
use crate::presentation::state::{EditModal, RefreshToggle};
use crate::Route;

#[component]
pub fn CadastroView() -> Element {
    let character_service = use_character_service();
    let gate = use_session_gate();
    let navigator = use_navigator();

    let refresh = use_signal(RefreshToggle::new);
    let mut edit_modal = use_signal(EditModal::default);

    // always a fresh copy from the server, never the table's row
    let open_editor = move |id: CharacterId| {
        edit_modal.write().open(id.clone());
        let svc = character_service.clone();
        spawn(async move {
            let result = svc.get_character(&id).await;
            edit_modal.write().apply_fetch(&id, result);
        });
    };

    rsx! {
        Banner {}
        section {
            class: "cadastro",
            div {
                class: "cadastro-header",
                h2 { "Cadastro de Personagens" }
                button {
                    class: "btn-logout",
                    onclick: move |_| {
                        gate.logout();
                        navigator.replace(Route::LoginRoute {});
                    },
                    "Logout"
                }
            }
            CreateCharacterPanel { refresh }
            CharacterTable { refresh, on_edit: open_editor }
        }
        EditCharacterModal { modal: edit_modal, refresh }
    }
}
