//! Route table
//!
//! Every page except the catch-all renders inside [`SiteLayout`]. Route
//! components stay thin: page title, guard, then the view.

use dioxus::prelude::*;

use crate::application::services::GuardTarget;
use crate::presentation::components::common::{Footer, NavBar};

mod bio;
mod cadastro;
mod contato;
mod home;
mod login;
mod not_found;
mod personagens;
mod temporadas;

use bio::BioRoute;
use cadastro::CadastroRoute;
use contato::ContatoRoute;
use home::HomeRoute;
use login::LoginRoute;
use not_found::NotFoundRoute;
use personagens::PersonagensRoute;
use temporadas::{TemporadaRoute, TemporadasRoute};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        HomeRoute {},
        #[route("/personagens")]
        PersonagensRoute {},
        #[route("/temporadas")]
        TemporadasRoute {},
        #[route("/temporada/:id")]
        TemporadaRoute { id: u32 },
        #[route("/contato")]
        ContatoRoute {},
        #[route("/bio/:id")]
        BioRoute { id: String },
        #[route("/login")]
        LoginRoute {},
        #[route("/cadastro")]
        CadastroRoute {},
    #[end_layout]
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}

impl From<GuardTarget> for Route {
    fn from(target: GuardTarget) -> Self {
        match target {
            GuardTarget::Login => Route::LoginRoute {},
            GuardTarget::Cadastro => Route::CadastroRoute {},
        }
    }
}

/// Site chrome around every page
#[component]
fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "site",
            NavBar {}
            main {
                class: "site-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
