//! HTTP Todo API
//!
//! `reqwest` client for the REST endpoints. Compiles to `fetch` on wasm32.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{ApiError, TodoApi};
use crate::model::{NewTodo, Project, RecordId, Todo, TodoPatch};

#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct CreateProjectBody<'a> {
    name: &'a str,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = send(builder).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        send(builder).await.map(|_| ())
    }
}

async fn send(builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let resp = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Everything except the RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Encode an id for use as a single path segment
fn segment(id: &RecordId) -> String {
    utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string()
}

fn projects_path() -> String {
    "/projects".to_string()
}

fn project_path(id: &RecordId) -> String {
    format!("/projects/{}", segment(id))
}

fn todos_path(project_id: &RecordId) -> String {
    format!("/projects/{}/todos", segment(project_id))
}

fn todo_path(project_id: &RecordId, id: &RecordId) -> String {
    format!("/projects/{}/todos/{}", segment(project_id), segment(id))
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.send_json(self.client.get(self.url(&projects_path()))).await
    }

    async fn create_project(&self, name: &str) -> Result<Project, ApiError> {
        let builder = self
            .client
            .post(self.url(&projects_path()))
            .json(&CreateProjectBody { name });
        self.send_json(builder).await
    }

    async fn delete_project(&self, id: &RecordId) -> Result<(), ApiError> {
        self.send_empty(self.client.delete(self.url(&project_path(id)))).await
    }

    async fn get_todos(&self, project_id: &RecordId) -> Result<Vec<Todo>, ApiError> {
        self.send_json(self.client.get(self.url(&todos_path(project_id)))).await
    }

    async fn create_todo(&self, project_id: &RecordId, todo: &NewTodo<'_>) -> Result<Todo, ApiError> {
        let builder = self.client.post(self.url(&todos_path(project_id))).json(todo);
        self.send_json(builder).await
    }

    async fn update_todo(
        &self,
        project_id: &RecordId,
        id: &RecordId,
        patch: &TodoPatch,
    ) -> Result<Todo, ApiError> {
        let builder = self.client.patch(self.url(&todo_path(project_id, id))).json(patch);
        self.send_json(builder).await
    }

    async fn delete_todo(&self, project_id: &RecordId, id: &RecordId) -> Result<(), ApiError> {
        self.send_empty(self.client.delete(self.url(&todo_path(project_id, id)))).await
    }
}
