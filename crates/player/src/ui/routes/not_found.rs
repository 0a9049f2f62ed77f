use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFoundRoute(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "No route matched");

    rsx! {
        div {
            class: "not-found",
            h1 { "Página não encontrada" }
            p { "/{path}" }
            Link { to: Route::HomeRoute {}, "Voltar para a Home" }
        }
    }
}
