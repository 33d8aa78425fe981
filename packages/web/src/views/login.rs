//! Login page view with the identifier/password form.

use dioxus::prelude::*;
use domain::SessionGuard;
use ui::{use_auth, use_current_user, use_services, Notice};

use crate::Route;

/// Login page component. Reachable with or without a session.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let nav = use_navigator();
    let current = use_current_user();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let result = SessionGuard::verify(&services.auth, &identifier(), &password()).await;
            loading.set(false);

            match result {
                Ok(user) => {
                    auth.write().establish(user);
                    password.set(String::new());
                    nav.push(Route::Profile {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "login-container",

            h1 { class: "login-title", "InsightFlow" }
            p { class: "login-subtitle", "Sign in with your username or email" }

            if let Some(user) = current {
                p {
                    class: "login-subtitle",
                    "Signed in as {user.username}. "
                    Link { to: Route::Dashboard {}, "Go to the dashboard" }
                }
            }

            form {
                onsubmit: handle_login,
                class: "login-form",

                if let Some(err) = error() {
                    Notice { message: err }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Username or email",
                    autocomplete: "username",
                    value: identifier(),
                    oninput: move |evt: FormEvent| identifier.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
