//! Document CRUD on the documents service.

use domain::{Document, DocumentPatch, NewDocument};
use tracing::info;

use crate::client::HttpClient;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct DocumentService {
    http: HttpClient,
    documents_api_url: String,
}

impl DocumentService {
    pub fn new(documents_api_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new("documents service"),
            documents_api_url: documents_api_url.into(),
        }
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{id}", self.documents_api_url)
    }

    /// Every document, active or not, of every user.
    pub async fn list(&self) -> Result<Vec<Document>, ApiError> {
        self.http.send_json(self.http.get(&self.documents_api_url)).await
    }

    pub async fn list_by_workspace(&self, workspace_id: &str) -> Result<Vec<Document>, ApiError> {
        let url = format!("{}/workspace/{workspace_id}", self.documents_api_url);
        self.http.send_json(self.http.get(&url)).await
    }

    pub async fn get(&self, id: &str) -> Result<Document, ApiError> {
        self.http.send_json(self.http.get(&self.document_url(id))).await
    }

    /// Create a document. Missing required fields fail before any request.
    pub async fn create(&self, document: &NewDocument) -> Result<Document, ApiError> {
        document.validate()?;
        info!(title = %document.title, workspace = %document.workspace_id, "creating document");
        let request = self.http.post(&self.documents_api_url).json(document);
        self.http.send_json(request).await
    }

    pub async fn update(&self, id: &str, patch: &DocumentPatch) -> Result<Document, ApiError> {
        info!(document_id = id, "updating document");
        let request = self.http.patch(&self.document_url(id)).json(patch);
        self.http.send_json(request).await
    }

    /// Soft delete: the document moves to the owner's trash.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        info!(document_id = id, "deleting document");
        self.http.send_empty(self.http.delete(&self.document_url(id))).await
    }
}

#[cfg(test)]
mod tests {
    use domain::{codec, ValidationError};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn document_json(id: &str, content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "workspaceId": "ws-1",
            "title": "Meeting notes",
            "icon": "📝",
            "content": content,
            "createdByUserId": "u-1",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
            "isActive": true
        })
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/documents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                document_json("d-1", ""),
                document_json("d-2", "")
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/documents/d-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(document_json("d-1", "")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/documents/workspace/ws-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                document_json("d-2", "")
            ])))
            .mount(&server)
            .await;

        let service = DocumentService::new(format!("{}/api/documents", server.uri()));
        assert_eq!(service.list().await.unwrap().len(), 2);
        assert_eq!(service.get("d-1").await.unwrap().title, "Meeting notes");
        assert_eq!(service.list_by_workspace("ws-1").await.unwrap()[0].id, "d-2");
    }

    #[tokio::test]
    async fn test_create_validates_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(document_json("d-1", "")))
            .expect(0)
            .mount(&server)
            .await;

        let service = DocumentService::new(server.uri());
        let err = service
            .create(&NewDocument {
                workspace_id: "ws-1".to_string(),
                title: "  ".to_string(),
                icon: "📝".to_string(),
                content: String::new(),
                created_by_user_id: "u-1".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ValidationError::Required("title"))));
    }

    #[tokio::test]
    async fn test_update_sends_encoded_content() {
        let server = MockServer::start().await;
        let content = codec::encode("# Agenda\nBudget review");
        Mock::given(method("PATCH"))
            .and(path("/d-1"))
            .and(body_json(serde_json::json!({
                "title": "Meeting notes",
                "content": content
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(document_json("d-1", &content)))
            .expect(1)
            .mount(&server)
            .await;

        let service = DocumentService::new(server.uri());
        let patch = DocumentPatch {
            title: Some("Meeting notes".to_string()),
            icon: None,
            content: Some(content.clone()),
        };
        let saved = service.update("d-1", &patch).await.unwrap();
        assert_eq!(codec::decode(&saved.content), "# Agenda\n\n\nBudget review\n");
    }

    #[tokio::test]
    async fn test_delete_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({ "error": "database offline" })),
            )
            .mount(&server)
            .await;

        let service = DocumentService::new(server.uri());
        let err = service.delete("d-1").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Rejected { status: 500, ref message } if message == "database offline"
        ));
    }
}
