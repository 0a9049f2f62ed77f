use crate::presentation::views::home::HomeView;
use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn HomeRoute() -> Element {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title("The Office");
    });

    rsx! { HomeView {} }
}
