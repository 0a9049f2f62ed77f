use dioxus::prelude::*;

#[component]
pub fn Banner() -> Element {
    rsx! {
        div {
            class: "banner",
            p { class: "banner-text", "Dunder Mifflin Paper Company" }
        }
    }
}
