//! # Backend service configuration: `insightflow.toml`
//!
//! The client talks to three independent REST services. Their base URLs are
//! grouped in [`ServiceConfig`], which can be read from a TOML file
//! ([`ServiceConfig::filename`] = `"insightflow.toml"`) and overlaid with
//! environment variables by the `api` crate.
//!
//! ```toml
//! users_api_url = "http://localhost:5000/api/users"
//! documents_api_url = "http://localhost:5209/api/documents"
//! tasks_api_url = "https://insightflow-taskservice.onrender.com"
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ServiceConfig::users_api_url`].
pub const USERS_API_URL_VAR: &str = "INSIGHTFLOW_USERS_API_URL";
/// Environment variable overriding [`ServiceConfig::documents_api_url`].
pub const DOCUMENTS_API_URL_VAR: &str = "INSIGHTFLOW_DOCUMENTS_API_URL";
/// Environment variable overriding [`ServiceConfig::tasks_api_url`].
pub const TASKS_API_URL_VAR: &str = "INSIGHTFLOW_TASKS_API_URL";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Users service, also serving `POST /login`.
    #[serde(default = "default_users_api_url")]
    pub users_api_url: String,
    /// Documents collection endpoint.
    #[serde(default = "default_documents_api_url")]
    pub documents_api_url: String,
    /// Tasks service root.
    #[serde(default = "default_tasks_api_url")]
    pub tasks_api_url: String,
}

fn default_users_api_url() -> String {
    "http://localhost:5000/api/users".to_string()
}

fn default_documents_api_url() -> String {
    "http://localhost:5209/api/documents".to_string()
}

fn default_tasks_api_url() -> String {
    "https://insightflow-taskservice.onrender.com".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            users_api_url: default_users_api_url(),
            documents_api_url: default_documents_api_url(),
            tasks_api_url: default_tasks_api_url(),
        }
    }
}

impl ServiceConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "insightflow.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Replace every URL for which `lookup` returns a non-empty value.
    /// Trailing slashes are stripped so paths can be appended uniformly.
    pub fn overlay<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            (USERS_API_URL_VAR, &mut self.users_api_url),
            (DOCUMENTS_API_URL_VAR, &mut self.documents_api_url),
            (TASKS_API_URL_VAR, &mut self.tasks_api_url),
        ];
        for (var, field) in fields {
            if let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) {
                *field = value.trim().to_string();
            }
            let trimmed = field.trim_end_matches('/').to_string();
            *field = trimmed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ServiceConfig::from_toml("").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config =
            ServiceConfig::from_toml(r#"users_api_url = "https://users.example.com/api/users""#)
                .unwrap();
        assert_eq!(config.users_api_url, "https://users.example.com/api/users");
        assert_eq!(config.tasks_api_url, default_tasks_api_url());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ServiceConfig::default();
        let parsed = ServiceConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_overlay_replaces_and_trims() {
        let config = ServiceConfig::default().overlay(|var| match var {
            USERS_API_URL_VAR => Some(" https://users.example.com/api/users/ ".to_string()),
            TASKS_API_URL_VAR => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.users_api_url, "https://users.example.com/api/users");
        assert_eq!(config.tasks_api_url, default_tasks_api_url());
        assert_eq!(config.documents_api_url, default_documents_api_url());
    }
}
