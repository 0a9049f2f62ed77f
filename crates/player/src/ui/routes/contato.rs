use crate::presentation::views::contato::ContatoView;
use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn ContatoRoute() -> Element {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title("Contato");
    });

    rsx! { ContatoView {} }
}
