use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no confirmation shown before destructive actions.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "p-6",
                p { class: "mb-5", "{message}" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Inline error or success banner.
#[component]
pub fn Notice(message: String, #[props(default)] success: bool) -> Element {
    let class = if success { "notice notice-success" } else { "notice notice-error" };
    rsx! {
        div { class: "{class}", "{message}" }
    }
}

/// Put `message` in `slot`. In the browser it is cleared again after three
/// seconds unless something else replaced it meanwhile.
pub fn flash(mut slot: Signal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    slot.set(Some(message.clone()));
    #[cfg(target_arch = "wasm32")]
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(3_000).await;
        if slot.peek().as_deref() == Some(message.as_str()) {
            slot.set(None);
        }
    });
}
