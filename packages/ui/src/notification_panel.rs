use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::notifications::{use_toaster, ToastLevel};
use crate::Icon;

const NOTIFICATIONS_CSS: Asset = asset!("/assets/styling/notifications.css");

/// Stack of toasts in the top-right corner.
#[component]
pub fn NotificationPanel() -> Element {
    let mut notifications = use_toaster().notifications();
    let toasts = notifications().toasts.clone();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }

        div {
            class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast success",
                        ToastLevel::Error => "toast error",
                    },
                    {match toast.level {
                        ToastLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                        ToastLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
                    }}
                    div {
                        class: "toast-body",
                        span { class: "toast-title", "{toast.title}" }
                        if let Some(description) = &toast.description {
                            span { class: "toast-description", "{description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| notifications.write().dismiss(toast.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
