//! Login route. An authenticated tab goes straight to the cadastro page.

use crate::application::services::GuardDecision;
use crate::presentation::services::use_session_gate;
use crate::presentation::views::login::LoginView;
use crate::use_platform;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn LoginRoute() -> Element {
    let platform = use_platform();
    let navigator = use_navigator();
    let decision = use_session_gate().guard_login_page();

    use_effect(move || {
        platform.set_page_title("Login");
        if let GuardDecision::Redirect(target) = decision {
            navigator.replace(Route::from(target));
        }
    });

    if decision != GuardDecision::Render {
        return rsx! {};
    }

    rsx! { LoginView {} }
}
