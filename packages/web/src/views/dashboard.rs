use dioxus::prelude::*;
use ui::icons::{FaImage, FaTags, FaTicket, FaUsers};
use ui::{use_session, Icon};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let name = session
        .read()
        .account()
        .map(|a| a.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "admin-page",
            h1 { "Welcome back, {name}" }
            div {
                class: "dashboard-grid",
                Link {
                    class: "dashboard-card",
                    to: Route::ManageUsers {},
                    Icon { icon: FaUsers, width: 20, height: 20 }
                    span { "Users" }
                }
                Link {
                    class: "dashboard-card",
                    to: Route::ManageSliders {},
                    Icon { icon: FaImage, width: 20, height: 20 }
                    span { "Sliders" }
                }
                Link {
                    class: "dashboard-card",
                    to: Route::ManageCategories {},
                    Icon { icon: FaTags, width: 20, height: 20 }
                    span { "Categories" }
                }
                Link {
                    class: "dashboard-card",
                    to: Route::ManageVouchers {},
                    Icon { icon: FaTicket, width: 20, height: 20 }
                    span { "Vouchers" }
                }
            }
        }
    }
}
