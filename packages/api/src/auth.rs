//! Login against the users service.

use domain::{AuthError, CredentialVerifier, UserInfo};
use serde::Serialize;
use tracing::info;

use crate::client::HttpClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

/// Credential check (`POST {users}/login`).
#[derive(Debug, Clone)]
pub struct AuthService {
    http: HttpClient,
    users_api_url: String,
}

impl AuthService {
    pub fn new(users_api_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new("users service"),
            users_api_url: users_api_url.into(),
        }
    }

    /// Log in with a username or email. Returns the user on success.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<UserInfo, ApiError> {
        let url = format!("{}/login", self.users_api_url);
        info!(%url, "logging in");
        let request = self.http.post(&url).json(&LoginRequest {
            identifier,
            password,
        });
        self.http.send_json(request).await
    }
}

impl CredentialVerifier for AuthService {
    async fn verify_credentials(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<UserInfo, AuthError> {
        self.login(identifier, password).await.map_err(AuthError::from)
    }
}
