//! Error types shared by the session guard and the form models.

use thiserror::Error;

/// Why a login (or a session refresh) did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The users service answered and rejected the credentials.
    #[error("{0}")]
    InvalidCredentials(String),

    /// No answer was received from the users service.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// A required field was empty; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AuthError {
    /// Whether retrying the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

/// A local form check that failed before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
}
