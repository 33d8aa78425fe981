use dioxus::prelude::*;
use domain::board::{due_date_from_input, due_date_to_input};
use domain::{NewTask, Task, TaskStatus, TaskUpdate, ValidationError};

use crate::modal::{ModalOverlay, Notice};

/// Form values for creating or editing a task. `due_date` holds the
/// `datetime-local` input value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub comment: String,
    pub status: TaskStatus,
    pub assigned_to: String,
    pub due_date: String,
}

impl TaskDraft {
    /// An empty draft assigned to `user_id`.
    pub fn for_user(user_id: &str) -> Self {
        Self {
            assigned_to: user_id.to_string(),
            ..Self::default()
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone().unwrap_or_default(),
            description: task.description.clone().unwrap_or_default(),
            comment: task.comment.clone().unwrap_or_default(),
            status: task.status().unwrap_or_default(),
            assigned_to: task.assigned_to.clone().unwrap_or_default(),
            due_date: task
                .due_date
                .as_deref()
                .map(due_date_to_input)
                .unwrap_or_default(),
        }
    }

    /// Empty when the input is blank or unparseable, so validation rejects it.
    fn due_date_iso(&self) -> String {
        due_date_from_input(&self.due_date).unwrap_or_default()
    }

    /// A new task always starts as pending.
    pub fn to_new_task(&self, document_id: &str) -> Result<NewTask, ValidationError> {
        let task = NewTask {
            document_id: document_id.to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            comment: self.comment.trim().to_string(),
            status: TaskStatus::Pending.as_str().to_string(),
            assigned_to: self.assigned_to.trim().to_string(),
            due_date: self.due_date_iso(),
        };
        task.validate()?;
        Ok(task)
    }

    pub fn to_update(&self, task_id: &str) -> Result<TaskUpdate, ValidationError> {
        let update = TaskUpdate {
            task_id: task_id.to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            comment: self.comment.trim().to_string(),
            status: self.status.as_str().to_string(),
            assigned_to: self.assigned_to.trim().to_string(),
            due_date: self.due_date_iso(),
        };
        update.validate()?;
        Ok(update)
    }
}

/// Modal form for a task. The status selector and the delete button are only
/// shown when editing.
#[component]
pub fn TaskForm(
    heading: String,
    initial: TaskDraft,
    #[props(default)] editing: bool,
    #[props(default)] error: Option<String>,
    on_submit: EventHandler<TaskDraft>,
    on_cancel: EventHandler<()>,
    #[props(default)] on_delete: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(move || initial);
    let TaskDraft {
        title,
        description,
        comment,
        status,
        assigned_to,
        due_date,
    } = draft();
    let status = status.as_str();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(draft());
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            form {
                class: "p-6",
                onsubmit: handle_submit,
                h2 { class: "modal-title", "{heading}" }

                if let Some(err) = error {
                    Notice { message: err }
                }

                label { class: "field-label", r#for: "task-title", "Title" }
                input {
                    id: "task-title",
                    class: "input",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }

                label { class: "field-label", r#for: "task-description", "Description" }
                textarea {
                    id: "task-description",
                    class: "input",
                    rows: "3",
                    value: "{description}",
                    oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                }

                label { class: "field-label", r#for: "task-comment", "Comment" }
                input {
                    id: "task-comment",
                    class: "input",
                    r#type: "text",
                    value: "{comment}",
                    oninput: move |evt: FormEvent| draft.write().comment = evt.value(),
                }

                if editing {
                    label { class: "field-label", r#for: "task-status", "Status" }
                    select {
                        id: "task-status",
                        class: "input",
                        value: "{status}",
                        onchange: move |evt: FormEvent| {
                            if let Ok(status) = evt.value().parse() {
                                draft.write().status = status;
                            }
                        },
                        for (value, name) in TaskStatus::ALL.map(|s| (s.as_str(), s.label())) {
                            option { key: "{value}", value: "{value}", "{name}" }
                        }
                    }
                }

                label { class: "field-label", r#for: "task-assignee", "Assigned to (user id)" }
                input {
                    id: "task-assignee",
                    class: "input",
                    r#type: "text",
                    value: "{assigned_to}",
                    oninput: move |evt: FormEvent| draft.write().assigned_to = evt.value(),
                }

                label { class: "field-label", r#for: "task-due", "Due date" }
                input {
                    id: "task-due",
                    class: "input",
                    r#type: "datetime-local",
                    value: "{due_date}",
                    oninput: move |evt: FormEvent| draft.write().due_date = evt.value(),
                }

                div {
                    class: "flex gap-2 mt-5",
                    button { r#type: "submit", class: "btn btn-primary", "Save" }
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    if editing {
                        button {
                            r#type: "button",
                            class: "btn btn-danger ml-auto",
                            onclick: move |_| on_delete.call(()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
