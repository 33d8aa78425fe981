//! The logged-in user's documents, split into active ones and the trash.

use std::collections::BTreeSet;

use crate::models::Document;

/// Which workspace the document list is narrowed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkspaceFilter {
    #[default]
    All,
    Only(String),
}

impl WorkspaceFilter {
    /// Build from a `<select>` value, where `"all"` or `""` mean no filter.
    pub fn from_select(value: &str) -> Self {
        match value {
            "" | "all" => WorkspaceFilter::All,
            ws => WorkspaceFilter::Only(ws.to_string()),
        }
    }

    pub fn as_select(&self) -> &str {
        match self {
            WorkspaceFilter::All => "all",
            WorkspaceFilter::Only(ws) => ws,
        }
    }

    fn matches(&self, document: &Document) -> bool {
        match self {
            WorkspaceFilter::All => true,
            WorkspaceFilter::Only(ws) => &document.workspace_id == ws,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    active: Vec<Document>,
    trashed: Vec<Document>,
}

impl Library {
    /// Keep only documents created by `user_id`; inactive ones go to the trash.
    pub fn for_owner(documents: Vec<Document>, user_id: &str) -> Self {
        let (active, trashed) = documents
            .into_iter()
            .filter(|d| d.created_by_user_id == user_id)
            .partition(|d| d.is_active);
        Self { active, trashed }
    }

    pub fn active(&self) -> &[Document] {
        &self.active
    }

    pub fn trash(&self) -> &[Document] {
        &self.trashed
    }

    /// Distinct workspace ids of active documents, sorted.
    pub fn workspaces(&self) -> Vec<String> {
        self.active
            .iter()
            .map(|d| d.workspace_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn filtered(&self, filter: &WorkspaceFilter) -> Vec<&Document> {
        self.active.iter().filter(|d| filter.matches(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, owner: &str, workspace: &str, active: bool) -> Document {
        Document {
            id: id.to_string(),
            workspace_id: workspace.to_string(),
            title: format!("Doc {id}"),
            icon: "📄".to_string(),
            content: String::new(),
            created_by_user_id: owner.to_string(),
            created_at: String::new(),
            updated_at: String::new(),
            is_active: active,
        }
    }

    fn sample() -> Library {
        Library::for_owner(
            vec![
                doc("1", "alice", "ws-b", true),
                doc("2", "alice", "ws-a", true),
                doc("3", "bob", "ws-c", true),
                doc("4", "alice", "ws-d", false),
                doc("5", "alice", "ws-b", true),
            ],
            "alice",
        )
    }

    #[test]
    fn test_for_owner_splits_active_and_trash() {
        let library = sample();
        let active: Vec<&str> = library.active().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(active, vec!["1", "2", "5"]);
        assert_eq!(library.trash().len(), 1);
        assert_eq!(library.trash()[0].id, "4");
    }

    #[test]
    fn test_workspaces_are_unique_and_sorted() {
        assert_eq!(sample().workspaces(), vec!["ws-a".to_string(), "ws-b".to_string()]);
    }

    #[test]
    fn test_filtered_by_workspace() {
        let library = sample();
        assert_eq!(library.filtered(&WorkspaceFilter::All).len(), 3);
        let only_b = library.filtered(&WorkspaceFilter::from_select("ws-b"));
        assert!(only_b.iter().all(|d| d.workspace_id == "ws-b"));
        assert_eq!(only_b.len(), 2);
        assert!(library.filtered(&WorkspaceFilter::from_select("ws-d")).is_empty());
    }

    #[test]
    fn test_filter_select_values() {
        assert_eq!(WorkspaceFilter::from_select("all"), WorkspaceFilter::All);
        assert_eq!(WorkspaceFilter::from_select(""), WorkspaceFilter::All);
        assert_eq!(WorkspaceFilter::from_select("ws-1").as_select(), "ws-1");
    }
}
