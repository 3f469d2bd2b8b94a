use admin::AdminConfig;
use dioxus::prelude::*;

use ui::{Navbar, ProtectedRoute, SessionGate, SessionProvider};
use views::{
    Auth, Dashboard, Forgot, Home, ManageCategories, ManageSliders, ManageUsers, ManageVouchers,
    NotFound, Orders,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/order")]
        Orders {},
        #[route("/auth")]
        Auth {},
        #[route("/forgot")]
        Forgot {},
        #[nest("/admin")]
            #[layout(AdminLayout)]
                #[route("/")]
                Dashboard {},
                #[route("/user")]
                ManageUsers {},
                #[route("/slider")]
                ManageSliders {},
                #[route("/category")]
                ManageCategories {},
                #[route("/voucher")]
                ManageVouchers {},
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded configuration; see [`AdminConfig`] for the keys.
const CONFIG_TOML: &str = include_str!("../admin.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> AdminConfig {
    AdminConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::error!("{e}, falling back to defaults");
        AdminConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Top navigation plus the startup session fetch around every page.
#[component]
fn AppShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Navbar {
            Link { class: "navbar-brand", to: Route::Home {}, "Storefront" }
            Link { to: Route::Orders {}, "Orders" }
            Link { to: Route::Dashboard {}, "Admin" }
        }
        SessionGate {
            path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}

/// Admin sidebar. Everything under `/admin` requires a session.
#[component]
fn AdminLayout() -> Element {
    rsx! {
        ProtectedRoute {
            div {
                class: "admin-shell",
                aside {
                    class: "admin-sidebar",
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    Link { to: Route::ManageUsers {}, "Users" }
                    Link { to: Route::ManageSliders {}, "Sliders" }
                    Link { to: Route::ManageCategories {}, "Categories" }
                    Link { to: Route::ManageVouchers {}, "Vouchers" }
                }
                main {
                    class: "admin-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AdminConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.session.auth_path, "/auth");
        assert_eq!(config.session.fetch_exempt, vec!["/auth", "/forgot"]);
    }

    #[test]
    fn test_admin_paths_resolve() {
        assert_eq!("/admin".parse::<Route>().ok(), Some(Route::Dashboard {}));
        assert_eq!(
            "/admin/voucher".parse::<Route>().ok(),
            Some(Route::ManageVouchers {})
        );
        assert_eq!(Route::ManageSliders {}.to_string(), "/admin/slider");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert!(matches!(
            "/nowhere".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
