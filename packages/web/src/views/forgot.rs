use admin::Notifier;
use dioxus::prelude::*;
use ui::{use_api, use_toaster};

use crate::Route;

/// Password recovery: the backend mails a reset link.
#[component]
pub fn Forgot() -> Element {
    let api = use_api();
    let mut toaster = use_toaster();
    let mut email = use_signal(String::new);
    let mut sent = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let e = email().trim().to_string();
            if e.is_empty() || !e.contains('@') {
                toaster.error("Invalid input", "Please enter a valid email");
                return;
            }
            loading.set(true);
            let result = api.forgot_password(&e).await;
            loading.set(false);
            match result {
                Ok(res) if res.is_ok_status() => sent.set(true),
                Ok(res) => toaster.error(
                    "Could not send reset email",
                    res.message.as_deref().unwrap_or(admin::error::GENERIC_FAILURE),
                ),
                Err(e) => toaster.error("Could not send reset email", &e.message),
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-[80vh] p-8",
            div {
                class: "w-full max-w-sm",
                h1 { class: "text-xl font-semibold mb-2", "Forgot password" }
                if sent() {
                    p { class: "text-sm text-neutral-600 mb-4", "If an account exists for {email}, a reset link is on its way." }
                } else {
                    form {
                        onsubmit: handle_submit,
                        p { class: "text-sm text-neutral-600 mb-4", "Enter your account email and we will send you a reset link." }
                        input {
                            class: "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm outline-none mb-4",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary w-full justify-center",
                            r#type: "submit",
                            disabled: loading(),
                            "Send reset link"
                        }
                    }
                }
                div {
                    class: "mt-4 text-sm",
                    Link { to: Route::Auth {}, "Back to sign in" }
                }
            }
        }
    }
}
