//! Public characters gallery

use dioxus::prelude::*;

use crate::presentation::components::character::CharacterCard;
use crate::presentation::components::common::Banner;
use crate::presentation::services::use_character_service;
use crate::presentation::state::{CharacterListState, RefreshToggle};

#[component]
pub fn PersonagensView() -> Element {
    let character_service = use_character_service();
    let mut list = use_signal(CharacterListState::new);

    use_effect(move || {
        // nothing flips here; the gallery loads once per visit
        let toggle = RefreshToggle::new();
        if !list.write().begin_reload(&toggle) {
            return;
        }
        let svc = character_service.clone();
        spawn(async move {
            let result = svc.list_characters().await;
            list.write().apply_fetch(toggle.generation(), result);
        });
    });

    let characters = list.read().characters().to_vec();

    rsx! {
        Banner {}
        section {
            class: "character-gallery",
            h1 { "Personagens" }
            div {
                class: "gallery-grid",
                for character in characters {
                    CharacterCard { key: "{character.id}", character: character.clone() }
                }
            }
        }
    }
}
