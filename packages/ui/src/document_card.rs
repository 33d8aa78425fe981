use dioxus::prelude::*;
use domain::Document;

/// One entry of the document list. Trashed documents only show their
/// metadata; active ones get edit, tasks and delete actions.
#[component]
pub fn DocumentCard(
    document: Document,
    on_open: EventHandler<String>,
    on_tasks: EventHandler<String>,
    on_delete: EventHandler<Document>,
) -> Element {
    let Document {
        id,
        workspace_id,
        title,
        icon,
        updated_at,
        is_active,
        ..
    } = document.clone();
    let open_id = id.clone();
    let class = if is_active { "doc-card" } else { "doc-card doc-card-trashed" };

    rsx! {
        div {
            class: "{class}",
            div {
                class: "doc-card-header",
                span { class: "doc-card-icon", "{icon}" }
                h3 { class: "doc-card-title", "{title}" }
            }
            p { class: "doc-card-meta", "Workspace: {workspace_id}" }
            if !updated_at.is_empty() {
                p { class: "doc-card-meta", "Updated: {updated_at}" }
            }
            if is_active {
                div {
                    class: "flex gap-2 mt-3",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_open.call(open_id.clone()),
                        "Edit"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_tasks.call(id.clone()),
                        "Tasks"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_delete.call(document.clone()),
                        "Delete"
                    }
                }
            } else {
                p { class: "doc-card-meta", "In trash" }
            }
        }
    }
}
