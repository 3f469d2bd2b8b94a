//! Session context, startup account fetch and the logout control.

use std::rc::Rc;

use admin::{AdminConfig, BootstrapSequencer, RenderGate, RouteGuard, SessionState};
use api::RestClient;
use dioxus::prelude::*;

use crate::notification_panel::NotificationPanel;
use crate::notifications::{Notifications, Toaster};
use crate::Loading;

/// The signed-in account. Updates on login, logout and after the startup fetch.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The REST client shared by every page.
pub fn use_api() -> RestClient {
    use_context::<RestClient>()
}

pub fn use_route_guard() -> RouteGuard {
    use_context::<RouteGuard>()
}

/// Provides the session, the REST client, the route guard and toasts.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: AdminConfig, children: Element) -> Element {
    use_context_provider(|| RestClient::from_config(&config.api));
    use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(|| RouteGuard::from_config(&config.session));
    use_context_provider(|| Rc::new(BootstrapSequencer::new(&config.session)));

    let notifications = use_signal(Notifications::default);
    use_context_provider(|| Toaster::new(notifications, config.notifications.dismiss_after_secs));

    rsx! {
        {children}
        NotificationPanel {}
    }
}

/// Runs the startup account fetch for `path` and withholds `children` while it is
/// outstanding, unless `path` may render without a session.
///
/// Mount it once, above every route.
#[component]
pub fn SessionGate(path: String, children: Element) -> Element {
    let sequencer = use_context::<Rc<BootstrapSequencer>>();
    let api = use_api();
    let mut session = use_session();

    use_hook({
        let sequencer = sequencer.clone();
        let path = path.clone();
        move || {
            spawn(async move {
                let outcome = sequencer.run(&api, &path).await;
                session.write().apply(outcome);
            });
        }
    });

    let gate = sequencer.render_gate(&path, &session.read());
    match gate {
        RenderGate::Loading => rsx! { Loading {} },
        RenderGate::Router => rsx! { {children} },
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let mut session = use_session();
    let auth_path = use_route_guard().auth_path().to_string();

    let onclick = move |_| {
        let api = api.clone();
        let auth_path = auth_path.clone();
        async move {
            if let Err(e) = api.logout().await {
                tracing::warn!("logout request failed: {e}");
            }
            session.write().sign_out();
            navigator().replace(auth_path);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
