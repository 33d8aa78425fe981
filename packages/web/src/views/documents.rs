use dioxus::prelude::*;
use domain::{codec, Document, Library, NewDocument, WorkspaceFilter};
use ui::{flash, use_current_user, use_services, ConfirmDialog, DocumentCard, Notice};

use crate::Route;

#[component]
pub fn Documents() -> Element {
    let services = use_services();
    let nav = use_navigator();
    let user_id = use_current_user().map(|u| u.id).unwrap_or_default();

    let mut library = use_signal(Library::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let success = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    let mut filter = use_signal(WorkspaceFilter::default);
    let mut show_trash = use_signal(|| false);
    let mut show_create = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Document>::None);

    let mut new_title = use_signal(String::new);
    let mut new_icon = use_signal(|| "📄".to_string());
    let mut new_workspace = use_signal(String::new);

    let _loader = use_resource({
        let services = services.clone();
        let user_id = user_id.clone();
        move || {
            let services = services.clone();
            let user_id = user_id.clone();
            let _ = reload();
            async move {
                loading.set(true);
                match services.documents.list().await {
                    Ok(documents) => {
                        library.set(Library::for_owner(documents, &user_id));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(format!("Could not load documents: {e}"))),
                }
                loading.set(false);
            }
        }
    });

    let handle_create = {
        let services = services.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let services = services.clone();
            let document = NewDocument {
                workspace_id: new_workspace().trim().to_string(),
                title: new_title().trim().to_string(),
                icon: new_icon().trim().to_string(),
                content: codec::encode(""),
                created_by_user_id: user_id.clone(),
            };
            spawn(async move {
                match services.documents.create(&document).await {
                    Ok(created) => {
                        tracing::info!(document_id = %created.id, "document created");
                        new_title.set(String::new());
                        show_create.set(false);
                        error.set(None);
                        flash(success, format!("Created \"{}\"", created.title));
                        reload += 1;
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_delete = move |_| {
        let services = services.clone();
        spawn(async move {
            let Some(document) = pending_delete.write().take() else {
                return;
            };
            match services.documents.delete(&document.id).await {
                Ok(()) => {
                    flash(success, format!("Moved \"{}\" to the trash", document.title));
                    reload += 1;
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let current_filter = filter();
    let selected = current_filter.as_select().to_string();
    let lib = library.read();
    let workspaces: Vec<(String, usize)> = lib
        .workspaces()
        .into_iter()
        .map(|ws| {
            let count = lib.filtered(&WorkspaceFilter::Only(ws.clone())).len();
            (ws, count)
        })
        .collect();
    let shown: Vec<Document> = if show_trash() {
        lib.trash().to_vec()
    } else {
        lib.filtered(&current_filter).into_iter().cloned().collect()
    };
    let active_count = lib.active().len();
    let trash_count = lib.trash().len();
    drop(lib);

    rsx! {
        div {
            class: "documents",
            div {
                class: "page-header",
                h1 { class: "page-title", "My documents" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_create.toggle(),
                    if show_create() { "Cancel" } else { "New document" }
                }
            }

            if let Some(err) = error() {
                Notice { message: err }
            }
            if let Some(msg) = success() {
                Notice { message: msg, success: true }
            }

            if show_create() {
                form {
                    class: "create-form",
                    onsubmit: handle_create,
                    label { class: "field-label", r#for: "new-doc-title", "Title" }
                    input {
                        id: "new-doc-title",
                        class: "input",
                        r#type: "text",
                        value: new_title(),
                        oninput: move |evt: FormEvent| new_title.set(evt.value()),
                    }
                    label { class: "field-label", r#for: "new-doc-icon", "Icon (emoji)" }
                    input {
                        id: "new-doc-icon",
                        class: "input",
                        r#type: "text",
                        value: new_icon(),
                        oninput: move |evt: FormEvent| new_icon.set(evt.value()),
                    }
                    label { class: "field-label", r#for: "new-doc-workspace", "Workspace" }
                    input {
                        id: "new-doc-workspace",
                        class: "input",
                        r#type: "text",
                        list: "known-workspaces",
                        value: new_workspace(),
                        oninput: move |evt: FormEvent| new_workspace.set(evt.value()),
                    }
                    datalist {
                        id: "known-workspaces",
                        for (ws, _) in workspaces.iter() {
                            option { key: "{ws}", value: "{ws}" }
                        }
                    }
                    button { class: "btn btn-primary mt-3", r#type: "submit", "Create" }
                }
            }

            div {
                class: "toolbar",
                select {
                    class: "input",
                    disabled: show_trash(),
                    value: "{selected}",
                    onchange: move |evt: FormEvent| filter.set(WorkspaceFilter::from_select(&evt.value())),
                    option { value: "all", "All workspaces ({active_count})" }
                    for (ws, count) in workspaces.iter() {
                        option { key: "{ws}", value: "{ws}", "{ws} ({count})" }
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| show_trash.toggle(),
                    if show_trash() { "Back to documents" } else { "Trash ({trash_count})" }
                }
            }

            if loading() {
                p { class: "empty-state", "Loading documents..." }
            } else if shown.is_empty() {
                p {
                    class: "empty-state",
                    if show_trash() { "The trash is empty." } else { "No documents yet." }
                }
            } else {
                div {
                    class: "doc-grid",
                    for document in shown {
                        DocumentCard {
                            key: "{document.id}",
                            document: document.clone(),
                            on_open: move |id| { nav.push(Route::DocumentEdit { id }); },
                            on_tasks: move |id| { nav.push(Route::DocumentTasks { id }); },
                            on_delete: move |doc| pending_delete.set(Some(doc)),
                        }
                    }
                }
            }

            if let Some(doc) = pending_delete() {
                ConfirmDialog {
                    message: format!("Move \"{}\" to the trash?", doc.title),
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
