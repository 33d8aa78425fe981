use dioxus::prelude::*;
use ui::{use_current_user, LogoutButton};

use crate::Route;

struct MenuCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    to: Route,
}

fn menu() -> [MenuCard; 3] {
    [
        MenuCard {
            icon: "📄",
            title: "Documents",
            description: "Create, edit and organize your documents by workspace.",
            to: Route::Documents {},
        },
        MenuCard {
            icon: "✅",
            title: "Tasks",
            description: "Track the tasks of each document on a kanban board.",
            to: Route::Tasks {},
        },
        MenuCard {
            icon: "👤",
            title: "Profile",
            description: "Review and update your account details.",
            to: Route::Profile {},
        },
    ]
}

#[component]
pub fn Dashboard() -> Element {
    let name = use_current_user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "dashboard",
            h1 { class: "page-title", "Welcome, {name}" }
            p { class: "page-subtitle", "What would you like to work on?" }

            div {
                class: "menu-grid",
                for card in menu() {
                    Link {
                        key: "{card.title}",
                        class: "menu-card",
                        to: card.to,
                        span { class: "menu-card-icon", "{card.icon}" }
                        h3 { "{card.title}" }
                        p { "{card.description}" }
                    }
                }
            }

            LogoutButton { class: "btn btn-outline mt-5", label: "Log out" }
        }
    }
}
