//! Kanban board over a document's tasks.
//!
//! Tasks are grouped into one column per [`TaskStatus`] and each column is
//! ordered by due date, earliest first, with undated tasks at the bottom. Tasks
//! whose status is missing or unknown are kept but shown in no column.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::models::{Task, TaskUpdate};

/// Board column a task belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Columns in display order.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire value used by the tasks service.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(format!("unknown task status: {other}")),
        }
    }
}

/// Parse a due date as sent by the tasks service or typed by a user.
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` (taken as UTC) or a
/// bare `YYYY-MM-DD`.
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Convert an HTML `datetime-local` value to the ISO timestamp the tasks
/// service expects.
pub fn due_date_from_input(input: &str) -> Option<String> {
    parse_due_date(input).map(format_timestamp)
}

/// Convert a stored due date to a `datetime-local` input value.
pub fn due_date_to_input(stored: &str) -> String {
    parse_due_date(stored)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Short date for task cards.
pub fn due_date_label(task: &Task) -> String {
    task.due_date
        .as_deref()
        .and_then(parse_due_date)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "No due date".to_string())
}

fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn due_key(task: &Task) -> Option<DateTime<Utc>> {
    task.due_date.as_deref().and_then(parse_due_date)
}

fn by_due_date(a: &&Task, b: &&Task) -> Ordering {
    match (due_key(a), due_key(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The tasks of one document, as shown on the board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    tasks: Vec<Task>,
}

impl Board {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id.as_deref() == Some(task_id))
    }

    /// Tasks in `status`, earliest due date first, undated last.
    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        let mut column: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.status() == Some(status))
            .collect();
        column.sort_by(by_due_date);
        column
    }

    /// Move a task to another column, as on a drop.
    ///
    /// Returns `None` when the task is unknown or already in `status`.
    /// Otherwise the local copy is updated immediately and the update to send
    /// to the tasks service is returned. Missing text fields are sent empty,
    /// a missing assignee becomes `acting_user` and a missing due date `now`.
    pub fn reassign(
        &mut self,
        task_id: &str,
        status: TaskStatus,
        acting_user: &str,
        now: DateTime<Utc>,
    ) -> Option<TaskUpdate> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id.as_deref() == Some(task_id))?;
        if task.status() == Some(status) {
            return None;
        }

        debug!(task_id, from = ?task.status, to = %status, "reassigning task");
        task.status = Some(status.as_str().to_string());

        let due_date = task
            .due_date
            .as_deref()
            .and_then(parse_due_date)
            .unwrap_or(now);

        Some(TaskUpdate {
            task_id: task_id.to_string(),
            title: task.title.clone().unwrap_or_default(),
            description: task.description.clone().unwrap_or_default(),
            comment: task.comment.clone().unwrap_or_default(),
            status: status.as_str().to_string(),
            assigned_to: task
                .assigned_to
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| acting_user.to_string()),
            due_date: format_timestamp(due_date),
        })
    }
}
