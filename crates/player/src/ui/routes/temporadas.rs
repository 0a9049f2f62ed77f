//! Season catalog and season detail routes

use crate::presentation::views::temporadas::{TemporadaView, TemporadasView};
use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn TemporadasRoute() -> Element {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title("Temporadas");
    });

    rsx! { TemporadasView {} }
}

#[component]
pub fn TemporadaRoute(id: u32) -> Element {
    let platform = use_platform();
    use_effect(use_reactive!(|(id,)| {
        let title = dunder_domain::season(id)
            .map(|s| s.title)
            .unwrap_or("Temporada não encontrada");
        platform.set_page_title(title);
    }));

    rsx! { TemporadaView { id } }
}
