//! Protected character management route
//!
//! Without the session flag nothing of the page renders; the history entry
//! is replaced with `/login` so going back does not land here again.

use crate::application::services::GuardDecision;
use crate::presentation::services::use_session_gate;
use crate::presentation::views::cadastro::CadastroView;
use crate::use_platform;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn CadastroRoute() -> Element {
    let platform = use_platform();
    let navigator = use_navigator();
    let decision = use_session_gate().guard_protected();

    use_effect(move || {
        match decision {
            GuardDecision::Render => platform.set_page_title("Cadastro"),
            GuardDecision::Redirect(target) => {
                tracing::debug!(?target, "Redirecting unauthenticated visit");
                navigator.replace(Route::from(target));
            }
        }
    });

    if decision != GuardDecision::Render {
        return rsx! {};
    }

    rsx! { CadastroView {} }
}
