//! Profile operations on the users service.

use domain::{AuthError, ProfileSource, UserInfo, UserUpdate};
use tracing::info;

use crate::client::HttpClient;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct UserService {
    http: HttpClient,
    users_api_url: String,
}

impl UserService {
    pub fn new(users_api_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new("users service"),
            users_api_url: users_api_url.into(),
        }
    }

    fn user_url(&self, user_id: &str) -> String {
        format!("{}/{user_id}", self.users_api_url)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<UserInfo, ApiError> {
        self.http.send_json(self.http.get(&self.user_url(user_id))).await
    }

    /// Apply a profile update and return the stored user.
    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<UserInfo, ApiError> {
        info!(user_id, "updating profile");
        let request = self.http.put(&self.user_url(user_id)).json(update);
        self.http.send_json(request).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        info!(user_id, "deleting account");
        self.http
            .send_empty(self.http.delete(&self.user_url(user_id)))
            .await
    }
}

impl ProfileSource for UserService {
    async fn fetch_user(&self, id: &str) -> Result<UserInfo, AuthError> {
        self.get_user(id).await.map_err(AuthError::from)
    }
}

#[cfg(test)]
mod tests {
    use domain::SessionGuard;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::AuthService;

    fn user_json(username: &str, full_name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "u-1",
            "username": username,
            "email": "alice@example.com",
            "fullName": full_name,
            "active": true,
            "address": ""
        })
    }

    #[tokio::test]
    async fn test_update_sends_only_changed_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/u-1"))
            .and(body_json(serde_json::json!({ "username": "alicia" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("alicia", "Alice")))
            .expect(1)
            .mount(&server)
            .await;

        let service = UserService::new(format!("{}/users", server.uri()));
        let update = UserUpdate {
            username: Some("alicia".to_string()),
            full_name: None,
        };
        let user = service.update_user("u-1", &update).await.unwrap();
        assert_eq!(user.username, "alicia");
    }

    #[tokio::test]
    async fn test_refresh_session_after_profile_edit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("alice", "")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/u-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("alice", "Alice L.")))
            .mount(&server)
            .await;

        let base = format!("{}/users", server.uri());
        let mut guard = SessionGuard::new();
        guard.login(&AuthService::new(&base), "alice", "secret").await.unwrap();
        guard.refresh(&UserService::new(&base)).await.unwrap();

        assert_eq!(guard.current_user().map(|u| u.full_name.as_str()), Some("Alice L."));
    }

    #[tokio::test]
    async fn test_delete_user_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/u-1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "User not found"
            })))
            .mount(&server)
            .await;

        let service = UserService::new(format!("{}/users", server.uri()));
        let err = service.delete_user("u-1").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "error 404: User not found");
    }
}
