//! # API crate: REST clients for the InsightFlow backend services
//!
//! The client never stores data itself. Every read and write goes to one of
//! three remote services, each wrapped by a small struct holding a shared
//! [`HttpClient`] and the service's base URL.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | `POST {users}/login`; implements [`domain::CredentialVerifier`] |
//! | [`users`] | Profile fetch, update and account deletion; implements [`domain::ProfileSource`] |
//! | [`documents`] | Document listing, lookup, create, patch and soft delete |
//! | [`tasks`] | Tasks of a document: list, create, full update, delete |
//! | [`config`] | Resolves the three base URLs from `insightflow.toml` and the environment |
//! | [`client`] | Request sending and error classification shared by all of the above |
//!
//! ## Errors
//!
//! Every call returns [`ApiError`]. A response with a non-success status
//! becomes [`ApiError::Rejected`] carrying the backend's `message` (or
//! `error`) field; no response at all becomes [`ApiError::Unavailable`]. The
//! login path converts these into [`domain::AuthError`] so the session guard
//! can tell bad credentials from an unreachable service.

pub mod auth;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod tasks;
pub mod users;

pub use auth::AuthService;
pub use client::HttpClient;
pub use documents::DocumentService;
pub use error::ApiError;
pub use tasks::TaskService;
pub use users::UserService;

use domain::ServiceConfig;

/// One handle per backend service, built from a single configuration.
#[derive(Debug, Clone)]
pub struct Services {
    pub auth: AuthService,
    pub users: UserService,
    pub documents: DocumentService,
    pub tasks: TaskService,
}

impl Services {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            auth: AuthService::new(&config.users_api_url),
            users: UserService::new(&config.users_api_url),
            documents: DocumentService::new(&config.documents_api_url),
            tasks: TaskService::new(&config.tasks_api_url),
        }
    }

    /// Services for the configuration returned by [`config::load`].
    pub fn from_env() -> Self {
        Self::new(&config::load())
    }
}
