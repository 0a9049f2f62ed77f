//! Character bio page

use dioxus::prelude::*;

use dunder_domain::{Character, CharacterId};

use crate::presentation::components::common::Banner;
use crate::presentation::services::{use_api_config, use_character_service};

#[component]
pub fn BioView(id: String) -> Element {
    let character_service = use_character_service();
    let config = use_api_config();
    let navigator = use_navigator();

    let mut character: Signal<Option<Character>> = use_signal(|| None);
    let mut is_loading = use_signal(|| true);

    let id_for_effect = id.clone();
    use_effect(use_reactive!(|(id_for_effect,)| {
        let svc = character_service.clone();
        let character_id = CharacterId::from_route(&id_for_effect);
        is_loading.set(true);
        spawn(async move {
            match svc.get_character(&character_id).await {
                Ok(found) => character.set(Some(found)),
                Err(e) => {
                    if e.is_not_found() {
                        tracing::debug!(character_id = %character_id, "No such character");
                    } else {
                        tracing::warn!(character_id = %character_id, error = %e, "Bio lookup failed");
                    }
                    character.set(None);
                }
            }
            is_loading.set(false);
        });
    }));

    if *is_loading.read() {
        return rsx! {
            Banner {}
            p { class: "bio-loading", "Carregando..." }
        };
    }

    let Some(current) = character.read().clone() else {
        return rsx! {
            Banner {}
            div { class: "bio-missing", "Personagem não encontrado." }
        };
    };
    let image = current.foto.as_ref().map(|foto| config.upload_url(foto));

    rsx! {
        Banner {}
        section {
            class: "bio",
            if let Some(src) = image {
                img { src: "{src}", alt: "{current.nome}" }
            }
            div {
                class: "bio-text",
                h1 { "{current.nome}" }
                p { "{current.descricao}" }
                button {
                    class: "btn-primary",
                    onclick: move |_| navigator.go_back(),
                    "Voltar"
                }
            }
        }
    }
}
