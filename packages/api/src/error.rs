//! Errors returned by the REST service wrappers.

use domain::{AuthError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("error {status}: {message}")]
    Rejected { status: u16, message: String },

    /// No response was received (connection refused, DNS, CORS, timeout).
    #[error("no response from the {service}: {reason}")]
    Unavailable {
        service: &'static str,
        reason: String,
    },

    /// A success response whose body was not the expected JSON.
    #[error("unexpected response from the {service}: {reason}")]
    Decode {
        service: &'static str,
        reason: String,
    },

    /// Rejected locally before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Backend rejections become invalid credentials; everything that is not a
/// verdict from the users service is reported as unavailability.
impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { message, .. } => AuthError::InvalidCredentials(message),
            ApiError::Validation(v) => AuthError::Validation(v),
            ApiError::Unavailable { service, .. } => AuthError::ServiceUnavailable(format!(
                "Could not connect to the {service}. Check that it is running."
            )),
            ApiError::Decode { service, reason } => AuthError::ServiceUnavailable(format!(
                "The {service} sent an unexpected response: {reason}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_mapping() {
        let rejected = ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(rejected.status(), Some(401));
        assert_eq!(
            AuthError::from(rejected),
            AuthError::InvalidCredentials("Invalid credentials".to_string())
        );

        let unavailable = ApiError::Unavailable {
            service: "users service",
            reason: "connection refused".to_string(),
        };
        assert_eq!(unavailable.status(), None);
        assert!(AuthError::from(unavailable).is_transient());

        let validation = ApiError::from(ValidationError::Required("title"));
        assert_eq!(validation.to_string(), "title is required");
    }
}
