use dioxus::prelude::*;

use crate::auth::{use_current_user, LogoutButton};

/// Top bar shown above every protected page.
///
/// `children` holds the navigation links; the router lives in the app crate.
#[component]
pub fn Navbar(children: Element) -> Element {
    let name = use_current_user().map(|u| u.display_name().to_string());

    rsx! {
        div {
            class: "navbar",
            span { class: "navbar-brand", "InsightFlow" }
            div { class: "navbar-links", {children} }
            div {
                class: "navbar-user",
                if let Some(name) = name {
                    span { class: "navbar-name", "{name}" }
                }
                LogoutButton { class: "btn btn-outline" }
            }
        }
    }
}
