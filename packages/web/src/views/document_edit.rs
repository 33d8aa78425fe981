use dioxus::prelude::*;
use domain::{Document, DocumentPatch};
use ui::{flash, use_services, DocumentEditor, Notice};

use crate::Route;

#[component]
pub fn DocumentEdit(id: String) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let services = use_services();
    let mut document = use_signal(|| Option::<Document>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let _loader = use_resource({
        let services = services.clone();
        move || {
            let services = services.clone();
            let id = id_signal();
            async move {
                loading.set(true);
                match services.documents.get(&id).await {
                    Ok(doc) => {
                        document.set(Some(doc));
                        error.set(None);
                    }
                    Err(e) => {
                        document.set(None);
                        error.set(Some(format!("Could not load the document: {e}")));
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_save = move |patch: DocumentPatch| {
        let services = services.clone();
        let id = id_signal();
        spawn(async move {
            saving.set(true);
            match services.documents.update(&id, &patch).await {
                Ok(saved) => {
                    document.set(Some(saved));
                    error.set(None);
                    flash(success, "Document saved");
                }
                Err(e) => error.set(Some(format!("Could not save: {e}"))),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "document-edit",
            div {
                class: "page-header",
                h1 { class: "page-title", "Edit document" }
                div {
                    class: "flex gap-2",
                    Link { class: "btn btn-outline", to: Route::DocumentTasks { id: id.clone() }, "Tasks" }
                    Link { class: "btn btn-outline", to: Route::Documents {}, "Back to documents" }
                }
            }

            if let Some(err) = error() {
                Notice { message: err }
            }
            if let Some(msg) = success() {
                Notice { message: msg, success: true }
            }

            if loading() && document.read().is_none() {
                p { class: "empty-state", "Loading document..." }
            } else if let Some(doc) = document() {
                dl {
                    class: "doc-meta",
                    dt { "ID" }
                    dd { "{doc.id}" }
                    dt { "Workspace" }
                    dd { "{doc.workspace_id}" }
                    dt { "Created" }
                    dd { "{doc.created_at}" }
                    dt { "Updated" }
                    dd { "{doc.updated_at}" }
                }
                DocumentEditor {
                    document: doc.clone(),
                    saving: saving(),
                    on_save: handle_save,
                }
            } else {
                p { class: "empty-state", "Document not found." }
            }
        }
    }
}
