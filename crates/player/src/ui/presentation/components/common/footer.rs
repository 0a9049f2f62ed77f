use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            p { "The Office - fan site. Personagens e temporadas de Dunder Mifflin, Scranton." }
        }
    }
}
