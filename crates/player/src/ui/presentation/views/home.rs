use dioxus::prelude::*;

use dunder_domain::SEASONS;

use crate::presentation::components::common::Banner;
use crate::presentation::views::temporadas::season_image_src;
use crate::Route;

/// Seasons highlighted on the landing page
const HIGHLIGHTED: usize = 3;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        Banner {}
        section {
            class: "season-highlights",
            for season in SEASONS.iter().take(HIGHLIGHTED) {
                Link {
                    key: "{season.id}",
                    class: "season-highlight",
                    to: Route::TemporadaRoute { id: season.id },
                    img { src: season_image_src(season), alt: season.title }
                    p { "{season.title}" }
                }
            }
        }
    }
}
