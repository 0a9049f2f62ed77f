use crate::presentation::views::bio::BioView;
use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn BioRoute(id: String) -> Element {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title("Bio");
    });

    // keyed so a different id remounts the view with fresh state
    rsx! { BioView { key: "{id}", id: id.clone() } }
}
