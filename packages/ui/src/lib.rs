//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

mod navbar;
pub use navbar::{AccountMenu, Navbar};

mod session;
pub use session::{use_api, use_route_guard, use_session, LogoutButton, SessionGate, SessionProvider};

mod guard;
pub use guard::{ProtectedRoute, Redirect};

mod loading;
pub use loading::Loading;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

pub mod notifications;
pub use notifications::{use_toaster, Notifications, Toast, ToastLevel, Toaster};

mod notification_panel;
pub use notification_panel::NotificationPanel;

mod entity_form;
pub use entity_form::EntityFormModal;

mod manage_entity;
pub use manage_entity::{row_key, Column, ManageEntityView};
