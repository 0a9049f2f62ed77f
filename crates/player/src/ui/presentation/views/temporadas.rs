//! Season catalog and season detail

use dioxus::prelude::*;

use dunder_domain::{season, Season, SEASONS};

use crate::presentation::components::common::Banner;
use crate::Route;

/// Static directory the season pictures are served from
const SEASON_IMAGE_DIR: &str = "/assets/seasons";

pub fn season_image_src(season: &Season) -> String {
    format!("{}/{}", SEASON_IMAGE_DIR, season.image)
}

#[component]
pub fn TemporadasView() -> Element {
    rsx! {
        Banner {}
        section {
            class: "season-catalog",
            h1 { "Temporadas" }
            for season in SEASONS.iter() {
                div {
                    key: "{season.id}",
                    class: "season-card",
                    img { src: season_image_src(season), alt: season.title }
                    div {
                        h3 { "{season.title}" }
                        p { "{season.summary}" }
                        Link {
                            class: "btn-primary",
                            to: Route::TemporadaRoute { id: season.id },
                            "Saiba Mais"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TemporadaView(id: u32) -> Element {
    let navigator = use_navigator();

    let Some(season) = season(id) else {
        return rsx! {
            section {
                class: "season-detail",
                p { "Temporada não encontrada." }
                Link { to: Route::TemporadasRoute {}, "Ver todas as temporadas" }
            }
        };
    };

    rsx! {
        section {
            class: "season-detail",
            img { src: season_image_src(season), alt: season.title }
            h1 { "{season.title}" }
            p { "{season.description}" }
            button {
                class: "btn-primary",
                onclick: move |_| navigator.go_back(),
                "Voltar"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_paths_point_at_the_season_directory() {
        let first = dunder_domain::season(1).unwrap();
        assert_eq!(season_image_src(first), "/assets/seasons/s1.jpg");
    }
}
