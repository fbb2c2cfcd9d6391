//! Todo API Abstraction
//!
//! The controller programs against `TodoApi`. `HttpApi` talks to the real
//! server; tests use an in-memory double.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{NewTodo, Project, RecordId, Todo, TodoPatch};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("json decode: {0}")]
    Decode(String),
}

/// CRUD operations on projects and their todos.
///
/// Futures are not `Send`: browser fetch futures live on the UI thread.
#[async_trait(?Send)]
pub trait TodoApi {
    // -- Projects --
    async fn get_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn create_project(&self, name: &str) -> Result<Project, ApiError>;
    async fn delete_project(&self, id: &RecordId) -> Result<(), ApiError>;

    // -- Todos --
    async fn get_todos(&self, project_id: &RecordId) -> Result<Vec<Todo>, ApiError>;
    async fn create_todo(&self, project_id: &RecordId, todo: &NewTodo<'_>) -> Result<Todo, ApiError>;
    async fn update_todo(
        &self,
        project_id: &RecordId,
        id: &RecordId,
        patch: &TodoPatch,
    ) -> Result<Todo, ApiError>;
    async fn delete_todo(&self, project_id: &RecordId, id: &RecordId) -> Result<(), ApiError>;
}
