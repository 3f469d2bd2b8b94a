use admin::GuardDecision;
use dioxus::prelude::*;

use crate::session::{use_route_guard, use_session};

/// Renders `children` only for a signed-in session; otherwise redirects to the
/// authentication page.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    let session = use_session();
    let guard = use_route_guard();

    let decision = guard.decide(&session.read());
    match decision {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(to) => rsx! { Redirect { to } },
    }
}

/// Replaces the current history entry with `to` once mounted.
#[component]
pub fn Redirect(to: String) -> Element {
    use_effect(move || {
        navigator().replace(to.clone());
    });
    rsx! {}
}
