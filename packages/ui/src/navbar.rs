use dioxus::prelude::*;

use crate::session::{use_route_guard, use_session, LogoutButton};
use crate::ADMIN_CSS;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: ADMIN_CSS }
        div {
            class: "navbar",
            {children}
            div { class: "navbar-spacer" }
            AccountMenu {}
        }
    }
}

/// Name of the signed-in account with a logout button, or a sign-in link.
#[component]
pub fn AccountMenu() -> Element {
    let session = use_session();
    let auth_path = use_route_guard().auth_path().to_string();

    let name = session.read().account().map(|a| a.display_name().to_string());
    match name {
        Some(name) => rsx! {
            div {
                class: "navbar-account",
                span { "{name}" }
                LogoutButton { class: "btn btn-outline" }
            }
        },
        None => rsx! {
            Link { class: "btn btn-primary", to: auth_path, "Sign in" }
        },
    }
}
