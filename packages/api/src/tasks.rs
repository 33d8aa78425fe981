//! Task CRUD on the tasks service.

use domain::{NewTask, Task, TaskUpdate};
use tracing::info;

use crate::client::HttpClient;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct TaskService {
    http: HttpClient,
    tasks_api_url: String,
}

impl TaskService {
    pub fn new(tasks_api_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new("tasks service"),
            tasks_api_url: tasks_api_url.into(),
        }
    }

    fn task_url(&self, task_id: &str) -> String {
        format!("{}/tasks/{task_id}", self.tasks_api_url)
    }

    pub async fn list_for_document(&self, document_id: &str) -> Result<Vec<Task>, ApiError> {
        let url = format!("{}/documents/{document_id}/tasks", self.tasks_api_url);
        self.http.send_json(self.http.get(&url)).await
    }

    pub async fn get(&self, task_id: &str) -> Result<Task, ApiError> {
        self.http.send_json(self.http.get(&self.task_url(task_id))).await
    }

    pub async fn create(&self, task: &NewTask) -> Result<Task, ApiError> {
        task.validate()?;
        info!(document_id = %task.document_id, title = %task.title, "creating task");
        let url = format!("{}/tasks", self.tasks_api_url);
        self.http.send_json(self.http.post(&url).json(task)).await
    }

    pub async fn update(&self, update: &TaskUpdate) -> Result<Task, ApiError> {
        update.validate()?;
        info!(task_id = %update.task_id, status = %update.status, "updating task");
        let request = self.http.patch(&self.task_url(&update.task_id)).json(update);
        self.http.send_json(request).await
    }

    pub async fn delete(&self, task_id: &str) -> Result<(), ApiError> {
        info!(task_id, "deleting task");
        self.http.send_empty(self.http.delete(&self.task_url(task_id))).await
    }
}
