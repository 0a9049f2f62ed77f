//! Top navigation bar

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav {
            class: "nav-bar",
            Link { class: "nav-brand", to: Route::HomeRoute {}, "The Office" }
            ul {
                class: "nav-links",
                li { Link { to: Route::HomeRoute {}, "Home" } }
                li { Link { to: Route::PersonagensRoute {}, "Personagens" } }
                li { Link { to: Route::TemporadasRoute {}, "Temporadas" } }
                li { Link { to: Route::ContatoRoute {}, "Contato" } }
                // the login page forwards to /cadastro when a session exists
                li { Link { to: Route::LoginRoute {}, "Cadastro" } }
            }
        }
    }
}
