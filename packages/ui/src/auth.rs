//! Session context and hooks for the UI.

use dioxus::prelude::*;
use domain::{SessionGuard, UserInfo};

/// Get the session guard.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<SessionGuard> {
    use_context::<Signal<SessionGuard>>()
}

/// The logged-in user, if any.
pub fn use_current_user() -> Option<UserInfo> {
    use_auth().read().current_user().cloned()
}

/// Provider component that owns the session.
/// Wrap your app with this component; it starts anonymous.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(SessionGuard::new()));

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Clearing the session is enough: the route guard sends the visitor to the
/// login page on the next render.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| auth.write().logout(),
            "{label}"
        }
    }
}
