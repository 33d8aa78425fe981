use dioxus::prelude::*;

use crate::Route;

/// Unmatched paths. The route guard normally redirects before this renders.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "empty-state",
            p { "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
