use crate::presentation::views::personagens::PersonagensView;
use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn PersonagensRoute() -> Element {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title("Personagens");
    });

    rsx! { PersonagensView {} }
}
