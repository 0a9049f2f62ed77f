//! Gallery card for the public characters page

use dioxus::prelude::*;

use dunder_domain::Character;

use crate::presentation::services::use_api_config;
use crate::Route;

#[component]
pub fn CharacterCard(character: Character) -> Element {
    let config = use_api_config();
    let image = character.foto.as_ref().map(|foto| config.upload_url(foto));

    rsx! {
        div {
            class: "character-card",
            if let Some(src) = image {
                img { src: "{src}", alt: "{character.nome}" }
            }
            h3 { "{character.nome}" }
            p { "{character.descricao}" }
            Link {
                class: "saiba-mais",
                to: Route::BioRoute { id: character.id.to_string() },
                "Saiba mais"
            }
        }
    }
}
