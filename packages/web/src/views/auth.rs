//! Sign-in and sign-up page.

use admin::models::RegisterRequest;
use admin::{AccountService, Notifier};
use dioxus::prelude::*;
use ui::{use_api, use_session, use_toaster, Redirect};

use crate::Route;

const INPUT_CLASS: &str = "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none mt-1.5 focus:border-primary-500";

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Login,
    Register,
}

#[component]
pub fn Auth() -> Element {
    let session = use_session();
    let mut tab = use_signal(|| Tab::Login);

    // Already signed in: nothing to do here
    if session.read().is_authenticated() {
        return rsx! { Redirect { to: Route::Home {}.to_string() } };
    }

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-[80vh] p-8",
            div {
                class: "w-full max-w-sm",
                div {
                    class: "flex gap-4 mb-6 border-b border-neutral-200",
                    button {
                        class: if tab() == Tab::Login { "auth-tab active" } else { "auth-tab" },
                        onclick: move |_| tab.set(Tab::Login),
                        "Sign in"
                    }
                    button {
                        class: if tab() == Tab::Register { "auth-tab active" } else { "auth-tab" },
                        onclick: move |_| tab.set(Tab::Register),
                        "Create account"
                    }
                }
                {match tab() {
                    Tab::Login => rsx! { LoginForm {} },
                    Tab::Register => rsx! { RegisterForm { on_registered: move |_| tab.set(Tab::Login) } },
                }}
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut toaster = use_toaster();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let u = username().trim().to_string();
            let p = password();
            if u.is_empty() || p.is_empty() {
                toaster.error("Invalid input", "Email and password are required");
                return;
            }

            loading.set(true);
            let result = api.login(&u, &p).await;
            loading.set(false);

            let login = match result {
                Ok(res) => match res.data {
                    Some(login) => login,
                    None => {
                        let message = res.message.unwrap_or_else(|| admin::error::GENERIC_FAILURE.to_string());
                        toaster.error("Login failed", &message);
                        return;
                    }
                },
                Err(e) => {
                    toaster.error("Login failed", &e.message);
                    return;
                }
            };

            let account = match login.user {
                Some(account) => Some(account),
                None => api.fetch_account().await.ok().and_then(|res| res.data),
            };
            let Some(account) = account else {
                toaster.error("Login failed", "Could not load the account");
                return;
            };

            let is_admin = account.is_admin();
            session.write().sign_in(account);
            toaster.success("Signed in");
            if is_admin {
                navigator().replace(Route::Dashboard {});
            } else {
                navigator().replace(Route::Home {});
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_login,
            div {
                class: "mb-4",
                label { r#for: "login-email", class: "text-sm font-medium text-neutral-700", "Email" }
                input {
                    id: "login-email",
                    class: INPUT_CLASS,
                    r#type: "email",
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
            }
            div {
                class: "mb-2",
                label { r#for: "login-password", class: "text-sm font-medium text-neutral-700", "Password" }
                input {
                    id: "login-password",
                    class: INPUT_CLASS,
                    r#type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            div {
                class: "mb-5 text-right text-sm",
                Link { to: Route::Forgot {}, "Forgot password?" }
            }
            button {
                class: "btn btn-primary w-full justify-center",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}

#[component]
fn RegisterForm(on_registered: EventHandler<()>) -> Element {
    let api = use_api();
    let mut toaster = use_toaster();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            let problem = if n.is_empty() {
                Some("Name is required")
            } else if e.is_empty() || !e.contains('@') {
                Some("Please enter a valid email")
            } else if p.len() < 6 {
                Some("Password must be at least 6 characters")
            } else if p != confirm_password() {
                Some("Passwords do not match")
            } else {
                None
            };
            if let Some(problem) = problem {
                toaster.error("Invalid input", problem);
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                name: n,
                email: e,
                password: p,
            };
            let result = api.register(&request).await;
            loading.set(false);

            match result {
                Ok(res) if res.is_ok_status() || res.data.is_some() => {
                    toaster.success("Account created, check your email to activate it");
                    on_registered.call(());
                }
                Ok(res) => {
                    let message = res.message.unwrap_or_else(|| admin::error::GENERIC_FAILURE.to_string());
                    toaster.error("Registration failed", &message);
                }
                Err(e) => toaster.error("Registration failed", &e.message),
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_register,
            for (id, caption, kind, mut field) in [
                ("register-name", "Name", "text", name),
                ("register-email", "Email", "email", email),
                ("register-password", "Password", "password", password),
                ("register-confirm", "Confirm password", "password", confirm_password),
            ] {
                div {
                    key: "{id}",
                    class: "mb-4",
                    label { r#for: id, class: "text-sm font-medium text-neutral-700", "{caption}" }
                    input {
                        id,
                        class: INPUT_CLASS,
                        r#type: kind,
                        value: field(),
                        oninput: move |evt: FormEvent| field.set(evt.value()),
                    }
                }
            }
            button {
                class: "btn btn-primary w-full justify-center mt-1",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Create account" }
            }
        }
    }
}
