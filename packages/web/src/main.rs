use dioxus::prelude::*;

use domain::{AccessDecision, View};
use ui::{use_auth, AuthProvider, Navbar, ServicesProvider};
use views::{Dashboard, DocumentEdit, DocumentTasks, Documents, Login, NotFound, Profile, Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(Guarded)]
        #[route("/")]
        Dashboard {},
        #[route("/documents")]
        Documents {},
        #[route("/documents/:id")]
        DocumentEdit { id: String },
        #[route("/documents/:id/tasks")]
        DocumentTasks { id: String },
        #[route("/tasks")]
        Tasks {},
        #[route("/profile")]
        Profile {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// The view this route shows, `None` for unmatched paths.
    fn view(&self) -> Option<View> {
        match self {
            Route::Login {} => Some(View::Login),
            Route::Dashboard {} => Some(View::Dashboard),
            Route::Documents {} => Some(View::Documents),
            Route::DocumentEdit { id } => Some(View::DocumentEdit { id: id.clone() }),
            Route::DocumentTasks { id } => Some(View::DocumentTasks { id: id.clone() }),
            Route::Tasks {} => Some(View::Tasks),
            Route::Profile {} => Some(View::Profile),
            Route::NotFound { .. } => None,
        }
    }
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::Login => Route::Login {},
            View::Dashboard => Route::Dashboard {},
            View::Documents => Route::Documents {},
            View::DocumentEdit { id } => Route::DocumentEdit { id },
            View::DocumentTasks { id } => Route::DocumentTasks { id },
            View::Tasks => Route::Tasks {},
            View::Profile => Route::Profile {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "InsightFlow" }

        ServicesProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Route guard: renders the page when the session allows it, otherwise
/// replaces the route with the redirect target.
#[component]
fn Guarded() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let decision = auth.read().authorize(route.view());
    match decision {
        AccessDecision::Render(_) => rsx! {
            Navbar {
                Link { to: Route::Dashboard {}, "Home" }
                Link { to: Route::Documents {}, "Documents" }
                Link { to: Route::Tasks {}, "Tasks" }
                Link { to: Route::Profile {}, "Profile" }
            }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        },
        AccessDecision::Redirect(target) => {
            tracing::debug!(from = ?route, to = %target, "redirecting");
            nav.replace(Route::from(target));
            rsx! {}
        }
    }
}
