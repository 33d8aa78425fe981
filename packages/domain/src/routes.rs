//! Application views and the render-or-redirect decision taken for them.

use std::fmt;

/// A page of the application, addressed by its URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Dashboard,
    Documents,
    DocumentEdit { id: String },
    Tasks,
    DocumentTasks { id: String },
    Profile,
}

impl View {
    /// Where anonymous visitors are sent.
    pub const LOGIN: View = View::Login;
    /// Where authenticated visitors land for unknown paths.
    pub const LANDING: View = View::Dashboard;

    /// Only the login page is reachable without a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, View::Login)
    }

    pub fn path(&self) -> String {
        match self {
            View::Login => "/login".to_string(),
            View::Dashboard => "/".to_string(),
            View::Documents => "/documents".to_string(),
            View::DocumentEdit { id } => format!("/documents/{id}"),
            View::Tasks => "/tasks".to_string(),
            View::DocumentTasks { id } => format!("/documents/{id}/tasks"),
            View::Profile => "/profile".to_string(),
        }
    }

    /// Match a URL path. Query string, fragment and trailing slash are ignored.
    /// Returns `None` for paths that name no view.
    pub fn parse(path: &str) -> Option<View> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(View::Dashboard),
            ["login"] => Some(View::Login),
            ["documents"] => Some(View::Documents),
            ["documents", id] => Some(View::DocumentEdit { id: id.to_string() }),
            ["documents", id, "tasks"] => Some(View::DocumentTasks { id: id.to_string() }),
            ["tasks"] => Some(View::Tasks),
            ["profile"] => Some(View::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of asking the session guard for a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Render(View),
    Redirect(View),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(View::parse("/"), Some(View::Dashboard));
        assert_eq!(View::parse(""), Some(View::Dashboard));
        assert_eq!(View::parse("/login"), Some(View::Login));
        assert_eq!(View::parse("/tasks/"), Some(View::Tasks));
        assert_eq!(View::parse("/profile?tab=1"), Some(View::Profile));
        assert_eq!(
            View::parse("/documents/abc"),
            Some(View::DocumentEdit { id: "abc".to_string() })
        );
        assert_eq!(
            View::parse("/documents/abc/tasks"),
            Some(View::DocumentTasks { id: "abc".to_string() })
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(View::parse("/nope"), None);
        assert_eq!(View::parse("/documents/abc/edit"), None);
        assert_eq!(View::parse("/login/extra"), None);
    }

    #[test]
    fn test_path_matches_parse() {
        let views = [
            View::Login,
            View::Dashboard,
            View::Documents,
            View::DocumentEdit { id: "d1".to_string() },
            View::Tasks,
            View::DocumentTasks { id: "d1".to_string() },
            View::Profile,
        ];
        for view in views {
            assert_eq!(View::parse(&view.path()), Some(view));
        }
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(!View::Login.is_protected());
        assert!(View::Dashboard.is_protected());
        assert!(View::DocumentEdit { id: "x".to_string() }.is_protected());
    }
}
