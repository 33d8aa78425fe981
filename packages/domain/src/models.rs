//! # Records exchanged with the InsightFlow backend services
//!
//! Every type here mirrors a JSON payload of one of the three remote services
//! (users, documents, tasks). Field names are camelCase on the wire.
//!
//! | Struct | Service | Purpose |
//! |--------|---------|---------|
//! | [`UserInfo`] | users | The authenticated user held by the session. |
//! | [`UserUpdate`] | users | Partial profile update; only changed fields are sent. |
//! | [`Document`] | documents | A stored document; `content` is the block JSON handled by [`crate::codec`]. |
//! | [`NewDocument`] / [`DocumentPatch`] | documents | Create and partial-update payloads. |
//! | [`Task`] | tasks | A task attached to a document. Every field is optional on the wire. |
//! | [`NewTask`] / [`TaskUpdate`] | tasks | Create and full-update payloads. |
//!
//! Create payloads carry a `validate` method that rejects empty required fields
//! with a [`ValidationError`] so the views can refuse them before any request.

use serde::{Deserialize, Serialize};

use crate::board::TaskStatus;
use crate::error::ValidationError;

/// The user record returned by the users service on login and profile fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl UserInfo {
    /// Full name if set, otherwise the username.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

/// Profile fields a user may change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl UserUpdate {
    /// Build an update holding only the fields that differ from `current`.
    /// An empty full name means "leave unchanged", not "clear".
    pub fn diff(current: &UserInfo, username: &str, full_name: &str) -> Self {
        let username = username.trim();
        let full_name = full_name.trim();
        Self {
            username: (username != current.username).then(|| username.to_string()),
            full_name: (!full_name.is_empty() && full_name != current.full_name)
                .then(|| full_name.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.full_name.is_none()
    }
}

/// A document as stored by the documents service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub workspace_id: String,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    /// Serialized block content, see [`crate::codec`].
    #[serde(default)]
    pub content: String,
    pub created_by_user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Payload for creating a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub workspace_id: String,
    pub title: String,
    pub icon: String,
    pub content: String,
    pub created_by_user_id: String,
}

impl NewDocument {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.workspace_id.trim().is_empty() {
            return Err(ValidationError::Required("workspace"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required("title"));
        }
        if self.icon.trim().is_empty() {
            return Err(ValidationError::Required("icon"));
        }
        if self.created_by_user_id.trim().is_empty() {
            return Err(ValidationError::Required("author"));
        }
        Ok(())
    }
}

/// Partial update of a document. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A task attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Raw status string; see [`Task::status`].
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// ISO timestamp as sent by the tasks service.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
}

impl Task {
    /// The parsed status, or `None` when absent or not one of the board columns.
    pub fn status(&self) -> Option<TaskStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub comment: String,
    pub status: String,
    pub assigned_to: String,
    pub due_date: String,
}

impl NewTask {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.document_id.trim().is_empty() {
            return Err(ValidationError::Required("document"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required("title"));
        }
        if self.due_date.trim().is_empty() {
            return Err(ValidationError::Required("due date"));
        }
        Ok(())
    }
}

/// Full update of a task. The tasks service replaces every field it receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip)]
    pub task_id: String,
    pub title: String,
    pub description: String,
    pub comment: String,
    pub status: String,
    pub assigned_to: String,
    pub due_date: String,
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.task_id.trim().is_empty() {
            return Err(ValidationError::Required("task"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required("title"));
        }
        if self.due_date.trim().is_empty() {
            return Err(ValidationError::Required("due date"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice Liddell".to_string(),
            active: true,
            address: String::new(),
            date_of_birth: None,
        }
    }

    #[test]
    fn test_user_info_from_backend_json() {
        let json = r#"{
            "id": "u-1",
            "username": "alice",
            "email": "alice@example.com",
            "fullName": "Alice Liddell",
            "active": true,
            "address": "Wonderland 1",
            "dateOfBirth": "1990-05-04"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name, "Alice Liddell");
        assert_eq!(user.date_of_birth.as_deref(), Some("1990-05-04"));
        assert!(user.active);
    }

    #[test]
    fn test_user_info_tolerates_missing_optional_fields() {
        let json = r#"{"id": "u-2", "username": "bob", "email": "bob@example.com"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "bob");
        assert!(!user.active);
    }

    #[test]
    fn test_user_update_diff_only_changed_fields() {
        let user = alice();
        assert!(UserUpdate::diff(&user, "alice", "Alice Liddell").is_empty());
        assert!(UserUpdate::diff(&user, " alice ", "").is_empty());

        let update = UserUpdate::diff(&user, "alicia", "");
        assert_eq!(update.username.as_deref(), Some("alicia"));
        assert!(update.full_name.is_none());

        let json = serde_json::to_value(UserUpdate::diff(&user, "alice", "Alice L.")).unwrap();
        assert_eq!(json, serde_json::json!({ "fullName": "Alice L." }));
    }

    #[test]
    fn test_new_document_validation_order() {
        let mut doc = NewDocument::default();
        assert_eq!(doc.validate(), Err(ValidationError::Required("workspace")));
        doc.workspace_id = "ws".to_string();
        assert_eq!(doc.validate(), Err(ValidationError::Required("title")));
        doc.title = "Notes".to_string();
        assert_eq!(doc.validate(), Err(ValidationError::Required("icon")));
        doc.icon = "📄".to_string();
        assert_eq!(doc.validate(), Err(ValidationError::Required("author")));
        doc.created_by_user_id = "u-1".to_string();
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_document_patch_skips_absent_fields() {
        let patch = DocumentPatch {
            content: Some("{}".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "content": "{}" }));
    }

    #[test]
    fn test_task_update_body_omits_task_id() {
        let update = TaskUpdate {
            task_id: "t-1".to_string(),
            title: "Write".to_string(),
            description: String::new(),
            comment: String::new(),
            status: "pending".to_string(),
            assigned_to: "u-1".to_string(),
            due_date: "2025-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("taskId").is_none());
        assert_eq!(json["assignedTo"], "u-1");
        assert_eq!(json["dueDate"], "2025-01-01T00:00:00Z");
    }

    #[test]
    fn test_task_status_parsing() {
        let task: Task = serde_json::from_str(r#"{"status": "in-progress"}"#).unwrap();
        assert_eq!(task.status(), Some(TaskStatus::InProgress));
        let task: Task = serde_json::from_str(r#"{"status": "archived"}"#).unwrap();
        assert_eq!(task.status(), None);
        assert_eq!(task.title_or_default(), "Untitled");
    }
}
