use dioxus::prelude::*;
use domain::board::due_date_label;
use domain::{Board, Task, TaskStatus};

/// Three-column kanban board. Dropping a card on another column emits
/// `on_move(task_id, status)`; clicking a card emits `on_select`.
#[component]
pub fn TaskBoard(
    board: Board,
    on_move: EventHandler<(String, TaskStatus)>,
    on_select: EventHandler<Task>,
) -> Element {
    let dragged = use_signal(|| Option::<String>::None);
    let hovered = use_signal(|| Option::<TaskStatus>::None);

    rsx! {
        div {
            class: "board",
            for status in TaskStatus::ALL {
                BoardColumn {
                    key: "{status}",
                    status,
                    tasks: board.column(status).into_iter().cloned().collect::<Vec<_>>(),
                    dragged,
                    hovered,
                    on_move,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn BoardColumn(
    status: TaskStatus,
    tasks: Vec<Task>,
    mut dragged: Signal<Option<String>>,
    mut hovered: Signal<Option<TaskStatus>>,
    on_move: EventHandler<(String, TaskStatus)>,
    on_select: EventHandler<Task>,
) -> Element {
    let class = if hovered() == Some(status) {
        "board-column board-column-over"
    } else {
        "board-column"
    };
    let label = status.label();
    let count = tasks.len();

    rsx! {
        div {
            class: "{class}",
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                if hovered() != Some(status) {
                    hovered.set(Some(status));
                }
            },
            ondragleave: move |_| hovered.set(None),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                hovered.set(None);
                let task_id = dragged.write().take();
                if let Some(task_id) = task_id {
                    on_move.call((task_id, status));
                }
            },

            h3 { class: "board-column-title", "{label} ({count})" }

            if tasks.is_empty() {
                p { class: "board-empty", "No tasks" }
            }
            for (id, task) in tasks.iter().map(|t| (t.id.clone().unwrap_or_default(), t.clone())) {
                TaskCard {
                    key: "{id}",
                    task,
                    dragged,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn TaskCard(task: Task, mut dragged: Signal<Option<String>>, on_select: EventHandler<Task>) -> Element {
    let id = task.id.clone().unwrap_or_default();
    let class = if dragged.read().as_deref() == Some(id.as_str()) {
        "task-card task-card-dragging"
    } else {
        "task-card"
    };
    let title = task.title_or_default().to_string();
    let description = task.description.clone().unwrap_or_default();
    let due = due_date_label(&task);

    rsx! {
        div {
            class: "{class}",
            draggable: "true",
            ondragstart: move |_| dragged.set(Some(id.clone())),
            ondragend: move |_| dragged.set(None),
            onclick: move |_| on_select.call(task.clone()),

            h4 { class: "task-card-title", "{title}" }
            if !description.is_empty() {
                p { class: "task-card-description", "{description}" }
            }
            span { class: "task-card-due", "{due}" }
        }
    }
}
