use std::time::Duration;

use admin::Notifier;
use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
}

/// Toasts currently on screen, newest last.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, level: ToastLevel, title: &str, description: Option<&str>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            level,
            title: title.to_string(),
            description: description.map(str::to_string),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// How long a toast stays up. `None` keeps it until the user closes it.
fn dismiss_delay(secs: u32) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(u64::from(secs)))
}

/// [`Notifier`] that shows toasts and removes them after a delay.
///
/// The dismissal timer runs at the root scope, so a toast raised by a dialog
/// or page that unmounts right after still goes away.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    notifications: Signal<Notifications>,
    dismiss_after_secs: u32,
}

impl Toaster {
    pub fn new(notifications: Signal<Notifications>, dismiss_after_secs: u32) -> Self {
        Self {
            notifications,
            dismiss_after_secs,
        }
    }

    pub fn notifications(&self) -> Signal<Notifications> {
        self.notifications
    }

    fn show(&mut self, level: ToastLevel, title: &str, description: Option<&str>) {
        let id = self.notifications.write().push(level, title, description);
        let Some(delay) = dismiss_delay(self.dismiss_after_secs) else {
            return;
        };
        let mut notifications = self.notifications;
        spawn_forever(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(delay).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(delay).await;

            notifications.write().dismiss(id);
        });
    }
}

impl Notifier for Toaster {
    fn success(&mut self, message: &str) {
        self.show(ToastLevel::Success, message, None);
    }

    fn error(&mut self, title: &str, description: &str) {
        tracing::warn!("{title}: {description}");
        self.show(ToastLevel::Error, title, Some(description));
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
