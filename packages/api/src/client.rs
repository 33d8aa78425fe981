//! Shared HTTP plumbing for the service wrappers.
//!
//! [`HttpClient`] wraps a [`reqwest::Client`] and turns every outcome into the
//! three-way split the views care about: a decoded body, a rejection carrying
//! the backend's message, or no response at all.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    service: &'static str,
}

impl HttpClient {
    /// `service` names the backend in error messages, e.g. `"users service"`.
    pub fn new(service: &'static str) -> Self {
        Self {
            client: reqwest::Client::new(),
            service,
        }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url)
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        self.client.put(url)
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        self.client.patch(url)
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.client.delete(url)
    }

    /// Send and decode a JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            service: self.service,
            reason: e.to_string(),
        })
    }

    /// Send and discard the body.
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!(service = self.service, error = %e, "request failed without response");
            ApiError::Unavailable {
                service: self.service,
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        debug!(service = self.service, status = %status, url = %response.url(), "response received");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());
        warn!(service = self.service, status = %status, %message, "request rejected");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// The backend's explanation: the `message` or `error` field of a JSON body,
/// or a short plain-text body.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["message", "error"]
            .iter()
            .find_map(|key| value.get(key)?.as_str().map(str::to_string)),
        Err(_) if body.len() <= 200 => Some(body.to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message": "Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            error_message(r#"{"error": "Title too long"}"#).as_deref(),
            Some("Title too long")
        );
        assert_eq!(
            error_message(r#"{"message": "first", "error": "second"}"#).as_deref(),
            Some("first")
        );
        assert_eq!(error_message(r#"{"status": 400}"#), None);
        assert_eq!(error_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_message("   "), None);
        assert_eq!(error_message(&"x".repeat(500)), None);
    }
}
