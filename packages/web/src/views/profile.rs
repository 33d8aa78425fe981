use dioxus::prelude::*;
use domain::UserUpdate;
use ui::{flash, use_auth, use_current_user, use_services, ConfirmDialog, Notice};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let nav = use_navigator();

    let user = use_current_user();

    let mut username = use_signal({
        let initial = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
        move || initial
    });
    let mut full_name = use_signal({
        let initial = user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default();
        move || initial
    });
    let mut error = use_signal(|| Option::<String>::None);
    let success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);

    let handle_update = {
        let services = services.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let services = services.clone();
            spawn(async move {
                error.set(None);
                let Some(current) = auth.read().current_user().cloned() else {
                    return;
                };
                let update = UserUpdate::diff(&current, &username(), &full_name());
                if update.is_empty() {
                    flash(success, "Nothing to update");
                    return;
                }

                saving.set(true);
                match services.users.update_user(&current.id, &update).await {
                    Ok(updated) => {
                        username.set(updated.username.clone());
                        full_name.set(updated.full_name.clone());
                        auth.write().replace_user(updated);
                        flash(success, "Profile updated");
                    }
                    Err(e) => error.set(Some(format!("Update failed: {e}"))),
                }
                saving.set(false);
            });
        }
    };

    let handle_reload = {
        let services = services.clone();
        move |_| {
            let services = services.clone();
            spawn(async move {
                error.set(None);
                let Some(id) = auth.read().current_user().map(|u| u.id.clone()) else {
                    return;
                };
                match services.users.get_user(&id).await {
                    Ok(user) => {
                        username.set(user.username.clone());
                        full_name.set(user.full_name.clone());
                        if auth.write().replace_user(user) {
                            flash(success, "Profile reloaded");
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_delete = move |_| {
        let services = services.clone();
        spawn(async move {
            confirm_delete.set(false);
            let Some(id) = auth.read().current_user().map(|u| u.id.clone()) else {
                return;
            };
            match services.users.delete_user(&id).await {
                Ok(()) => {
                    tracing::info!(user_id = %id, "account deleted");
                    auth.write().logout();
                    nav.replace(Route::Login {});
                }
                Err(e) => error.set(Some(format!("Delete failed: {e}"))),
            }
        });
    };

    // Briefly anonymous between logout and the guard's redirect.
    let Some(user) = user else {
        return rsx! {};
    };
    let status = if user.active { "Active" } else { "Inactive" };
    let address = if user.address.is_empty() { "-".to_string() } else { user.address.clone() };
    let birth = user.date_of_birth.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        div {
            class: "profile",
            h1 { class: "page-title", "Profile" }

            if let Some(err) = error() {
                Notice { message: err }
            }
            if let Some(msg) = success() {
                Notice { message: msg, success: true }
            }

            dl {
                class: "profile-details",
                dt { "Email" }
                dd { "{user.email}" }
                dt { "Address" }
                dd { "{address}" }
                dt { "Date of birth" }
                dd { "{birth}" }
                dt { "Status" }
                dd { "{status}" }
            }

            form {
                class: "profile-form",
                onsubmit: handle_update,

                label { class: "field-label", r#for: "profile-username", "Username" }
                input {
                    id: "profile-username",
                    class: "input",
                    r#type: "text",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                label { class: "field-label", r#for: "profile-full-name", "Full name" }
                input {
                    id: "profile-full-name",
                    class: "input",
                    r#type: "text",
                    placeholder: "Leave empty to keep the current name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }

                div {
                    class: "flex gap-2 mt-5",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: handle_reload,
                        "Reload"
                    }
                }
            }

            div {
                class: "danger-zone",
                h2 { "Delete account" }
                p { "This permanently removes your account." }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| confirm_delete.set(true),
                    "Delete account"
                }
            }

            if confirm_delete() {
                ConfirmDialog {
                    message: "Are you sure you want to delete your account? This cannot be undone.",
                    confirm_label: "Delete account",
                    on_confirm: handle_delete,
                    on_cancel: move |_| confirm_delete.set(false),
                }
            }
        }
    }
}
