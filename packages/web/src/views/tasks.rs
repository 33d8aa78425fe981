use chrono::Utc;
use dioxus::prelude::*;
use domain::{Board, Library, Task, TaskStatus};
use ui::{
    flash, use_current_user, use_services, ConfirmDialog, Notice, TaskBoard, TaskDraft, TaskForm,
};

use crate::Route;

/// Task entry point: pick one of your documents to open its board.
#[component]
pub fn Tasks() -> Element {
    let services = use_services();
    let user_id = use_current_user().map(|u| u.id).unwrap_or_default();

    let documents = use_resource(move || {
        let services = services.clone();
        let user_id = user_id.clone();
        async move {
            services
                .documents
                .list()
                .await
                .map(|docs| Library::for_owner(docs, &user_id))
                .map_err(|e| e.to_string())
        }
    });

    let listing = match &*documents.read() {
        None => rsx! { p { class: "empty-state", "Loading documents..." } },
        Some(Err(e)) => rsx! { Notice { message: format!("Could not load documents: {e}") } },
        Some(Ok(library)) if library.active().is_empty() => rsx! {
            p {
                class: "empty-state",
                "No documents yet. "
                Link { to: Route::Documents {}, "Create one" }
            }
        },
        Some(Ok(library)) => rsx! {
            ul {
                class: "doc-picker",
                for doc in library.active().iter().cloned() {
                    li {
                        key: "{doc.id}",
                        Link {
                            to: Route::DocumentTasks { id: doc.id.clone() },
                            "{doc.icon} {doc.title}"
                        }
                        span { class: "doc-card-meta", " {doc.workspace_id}" }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "tasks",
            h1 { class: "page-title", "Tasks" }
            p { class: "page-subtitle", "Choose a document to see its board." }

            {listing}
        }
    }
}

/// Kanban board of one document's tasks.
#[component]
pub fn DocumentTasks(id: String) -> Element {
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let services = use_services();
    let user_id = use_current_user().map(|u| u.id).unwrap_or_default();

    let mut board = use_signal(Board::default);
    let mut title = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let success = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    let mut create_error = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(|| Option::<Task>::None);
    let mut edit_error = use_signal(|| Option::<String>::None);
    let mut confirm_delete = use_signal(|| false);

    let _loader = use_resource({
        let services = services.clone();
        move || {
            let services = services.clone();
            let id = id_signal();
            let _ = reload();
            async move {
                loading.set(true);
                match services.tasks.list_for_document(&id).await {
                    Ok(tasks) => {
                        board.set(Board::from_tasks(tasks));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(format!("Could not load tasks: {e}"))),
                }
                loading.set(false);

                // The heading is cosmetic; fall back to the id.
                match services.documents.get(&id).await {
                    Ok(doc) => title.set(format!("{} {}", doc.icon, doc.title)),
                    Err(_) => title.set(id),
                }
            }
        }
    });

    let handle_move = {
        let services = services.clone();
        let user_id = user_id.clone();
        move |(task_id, status): (String, TaskStatus)| {
            let Some(update) = board.write().reassign(&task_id, status, &user_id, Utc::now()) else {
                return;
            };
            let services = services.clone();
            spawn(async move {
                if let Err(e) = services.tasks.update(&update).await {
                    tracing::warn!(task_id = %update.task_id, error = %e, "move failed, reloading board");
                    error.set(Some(format!("Could not move the task: {e}")));
                    reload += 1;
                }
            });
        }
    };

    let handle_create = {
        let services = services.clone();
        move |draft: TaskDraft| {
            let task = match draft.to_new_task(&id_signal()) {
                Ok(task) => task,
                Err(e) => {
                    create_error.set(Some(e.to_string()));
                    return;
                }
            };
            let services = services.clone();
            spawn(async move {
                match services.tasks.create(&task).await {
                    Ok(_) => {
                        show_create.set(false);
                        create_error.set(None);
                        flash(success, "Task created");
                        reload += 1;
                    }
                    Err(e) => create_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_update = {
        let services = services.clone();
        move |draft: TaskDraft| {
            let Some(task_id) = selected.read().as_ref().and_then(|t| t.id.clone()) else {
                return;
            };
            let update = match draft.to_update(&task_id) {
                Ok(update) => update,
                Err(e) => {
                    edit_error.set(Some(e.to_string()));
                    return;
                }
            };
            let services = services.clone();
            spawn(async move {
                match services.tasks.update(&update).await {
                    Ok(_) => {
                        selected.set(None);
                        edit_error.set(None);
                        flash(success, "Task updated");
                        reload += 1;
                    }
                    Err(e) => edit_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_delete = move |_| {
        confirm_delete.set(false);
        let Some(task_id) = selected.read().as_ref().and_then(|t| t.id.clone()) else {
            return;
        };
        let services = services.clone();
        spawn(async move {
            match services.tasks.delete(&task_id).await {
                Ok(()) => {
                    selected.set(None);
                    flash(success, "Task deleted");
                    reload += 1;
                }
                Err(e) => edit_error.set(Some(e.to_string())),
            }
        });
    };

    let heading = title();
    let edit_target = selected().map(|task| {
        let key = task.id.clone().unwrap_or_default();
        (key, TaskDraft::from_task(&task))
    });

    rsx! {
        div {
            class: "tasks",
            div {
                class: "page-header",
                h1 { class: "page-title", "Tasks · {heading}" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            create_error.set(None);
                            show_create.set(true);
                        },
                        "New task"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| reload += 1,
                        "Refresh"
                    }
                    Link { class: "btn btn-outline", to: Route::Tasks {}, "All documents" }
                }
            }

            if let Some(err) = error() {
                Notice { message: err }
            }
            if let Some(msg) = success() {
                Notice { message: msg, success: true }
            }

            if loading() && board.read().is_empty() {
                p { class: "empty-state", "Loading tasks..." }
            } else {
                TaskBoard {
                    board: board(),
                    on_move: handle_move,
                    on_select: move |task| {
                        edit_error.set(None);
                        selected.set(Some(task));
                    },
                }
            }

            if show_create() {
                TaskForm {
                    heading: "New task",
                    initial: TaskDraft::for_user(&user_id),
                    error: create_error(),
                    on_submit: handle_create,
                    on_cancel: move |_| show_create.set(false),
                }
            }

            if let Some((key, draft)) = edit_target {
                TaskForm {
                    key: "{key}",
                    heading: "Edit task",
                    initial: draft,
                    editing: true,
                    error: edit_error(),
                    on_submit: handle_update,
                    on_cancel: move |_| selected.set(None),
                    on_delete: move |_| confirm_delete.set(true),
                }
            }

            if confirm_delete() {
                ConfirmDialog {
                    message: "Delete this task?",
                    on_confirm: handle_delete,
                    on_cancel: move |_| confirm_delete.set(false),
                }
            }
        }
    }
}
