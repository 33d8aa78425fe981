//! Shared handles to the backend services.

use api::Services;
use dioxus::prelude::*;

/// Get the REST service handles built at startup.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provider component that resolves the service endpoints once and shares the
/// clients with every view below it.
#[component]
pub fn ServicesProvider(children: Element) -> Element {
    use_context_provider(Services::from_env);

    rsx! {
        {children}
    }
}
