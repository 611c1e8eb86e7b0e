// ABOUTME: HTTP client for the Peachy Task REST API
// ABOUTME: Issues typed task/label requests and normalizes every response

use std::time::Duration;

use peachy_core::{Label, Task, TaskCreateInput, TaskUpdateInput};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::normalize::{normalize_label, normalize_task};

/// Client for the Peachy Task backend
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client. The base URL is taken from deployment
    /// configuration; a trailing slash is trimmed.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List tasks, most recent first
    pub async fn list_tasks(&self, limit: usize) -> ApiResult<Vec<Task>> {
        debug!("Fetching tasks (limit: {})", limit);

        let url = format!("{}/tasks/", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;
        let response = Self::error_for_status(response).await?;

        let raw: Vec<Value> = response
            .json()
            .await
            .map_err(|e| ApiError::invalid(e.to_string()))?;
        raw.iter().map(normalize_task).collect()
    }

    /// Create a task; the server assigns the id and timestamps
    pub async fn create_task(&self, input: &TaskCreateInput) -> ApiResult<Task> {
        debug!("Creating task (title: {})", input.title);

        let url = format!("{}/tasks/", self.base_url);
        let response = self.http_client.post(&url).json(input).send().await?;
        let response = Self::error_for_status(response).await?;

        let raw: Value = response
            .json()
            .await
            .map_err(|e| ApiError::invalid(e.to_string()))?;
        normalize_task(&raw)
    }

    /// Partially update a task; only present fields are sent
    pub async fn update_task(&self, task_id: &str, input: &TaskUpdateInput) -> ApiResult<Task> {
        debug!("Updating task: {}", task_id);

        let url = format!("{}/tasks/{}", self.base_url, task_id);
        let response = self.http_client.patch(&url).json(input).send().await?;
        let response = Self::error_for_status(response).await?;

        let raw: Value = response
            .json()
            .await
            .map_err(|e| ApiError::invalid(e.to_string()))?;
        normalize_task(&raw)
    }

    /// Delete a task; the server answers 204
    pub async fn delete_task(&self, task_id: &str) -> ApiResult<()> {
        debug!("Deleting task: {}", task_id);

        let url = format!("{}/tasks/{}", self.base_url, task_id);
        let response = self.http_client.delete(&url).send().await?;
        Self::error_for_status(response).await?;
        Ok(())
    }

    /// List labels in creation order
    pub async fn list_labels(&self) -> ApiResult<Vec<Label>> {
        debug!("Fetching labels");

        let url = format!("{}/labels/", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        let response = Self::error_for_status(response).await?;

        let raw: Vec<Value> = response
            .json()
            .await
            .map_err(|e| ApiError::invalid(e.to_string()))?;
        raw.iter().map(normalize_label).collect()
    }

    /// Create a label; name and color travel as query parameters
    pub async fn create_label(&self, name: &str, color: Option<&str>) -> ApiResult<Label> {
        debug!("Creating label (name: {})", name);

        let url = format!("{}/labels/", self.base_url);
        let mut params = vec![("name", name)];
        if let Some(color) = color {
            params.push(("color", color));
        }

        let response = self.http_client.post(&url).query(&params).send().await?;
        let response = Self::error_for_status(response).await?;

        let raw: Value = response
            .json()
            .await
            .map_err(|e| ApiError::invalid(e.to_string()))?;
        normalize_label(&raw)
    }

    /// Update a label's name and/or color
    pub async fn update_label(
        &self,
        label_id: &str,
        name: Option<&str>,
        color: Option<&str>,
    ) -> ApiResult<Label> {
        debug!("Updating label: {}", label_id);

        let url = format!("{}/labels/{}", self.base_url, label_id);
        let mut params = Vec::new();
        if let Some(name) = name {
            params.push(("name", name));
        }
        if let Some(color) = color {
            params.push(("color", color));
        }

        let response = self.http_client.patch(&url).query(&params).send().await?;
        let response = Self::error_for_status(response).await?;

        let raw: Value = response
            .json()
            .await
            .map_err(|e| ApiError::invalid(e.to_string()))?;
        normalize_label(&raw)
    }

    /// Delete a label; the cascade into tasks is client-driven
    pub async fn delete_label(&self, label_id: &str) -> ApiResult<()> {
        debug!("Deleting label: {}", label_id);

        let url = format!("{}/labels/{}", self.base_url, label_id);
        let response = self.http_client.delete(&url).send().await?;
        Self::error_for_status(response).await?;
        Ok(())
    }

    /// Turn a non-2xx response into the uniform failure signal. The message
    /// prefers the JSON body's `detail` string and falls back to the HTTP
    /// status reason. A 204 passes through as success with no payload.
    async fn error_for_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(reason),
            Err(_) => reason,
        };

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
