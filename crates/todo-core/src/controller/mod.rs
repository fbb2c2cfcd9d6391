//! Application Controller
//!
//! Every operation runs: mark loading → call the API → merge the response
//! into `AppState` (or show the operation's error banner) → clear loading.
//! Views re-render from the state change; nothing is written before a
//! request resolves.


use std::future::Future;
use std::time::Duration;

use crate::api::{ApiError, TodoApi};
use crate::config::AppConfig;
use crate::filter::Filter;
use crate::model::{NewTodo, RecordId, TodoPatch};
use crate::state::{AppState, StateCell};
use crate::theme::Theme;

/// Browser side effects the controller needs
pub trait Host: Clone + 'static {
    /// Ask for a line of text; `None` when cancelled
    fn prompt(&self, message: &str) -> Option<String>;
    fn confirm(&self, message: &str) -> bool;
    fn load_preference(&self, key: &str) -> Option<String>;
    fn store_preference(&self, key: &str, value: &str);
    fn apply_theme(&self, theme: Theme);
    /// Run `task` once after `delay`, without blocking the caller
    fn run_after(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// API-calling operations, each with a fixed failure message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadProjects,
    CreateProject,
    DeleteProject,
    LoadTodos,
    AddTodo,
    UpdateTodo,
    DeleteTodo,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::LoadProjects => "Failed to load projects",
            Operation::CreateProject => "Failed to create project",
            Operation::DeleteProject => "Failed to delete project",
            Operation::LoadTodos => "Failed to load todos",
            Operation::AddTodo => "Failed to add todo",
            Operation::UpdateTodo => "Failed to update todo",
            Operation::DeleteTodo => "Failed to delete todo",
        }
    }
}

#[derive(Clone)]
pub struct Controller<A, S, H> {
    api: A,
    state: S,
    host: H,
    config: AppConfig,
}

impl<A, S, H> Controller<A, S, H>
where
    A: TodoApi,
    S: StateCell,
    H: Host,
{
    pub fn new(api: A, state: S, host: H, config: AppConfig) -> Self {
        Self { api, state, host, config }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Apply the stored theme and load the project list
    pub async fn init(&self) {
        let stored = self.host.load_preference(&self.config.theme_key);
        let theme = Theme::from_stored(stored.as_deref());
        self.state.update(|s| s.theme = theme);
        self.host.apply_theme(theme);
        self.load_projects().await;
    }

    pub async fn load_projects(&self) {
        log::debug!("[Controller] Loading projects");
        if let Some(projects) = self.request(Operation::LoadProjects, self.api.get_projects()).await {
            log::debug!("[Controller] Loaded {} projects", projects.len());
            self.state.update(|s| s.replace_projects(projects));
        }
    }

    /// Prompt for a name, create the project and switch to it
    pub async fn create_project(&self) {
        let Some(answer) = self.host.prompt("Enter project name:") else {
            return;
        };
        let name = answer.trim();
        if name.is_empty() {
            return;
        }

        if let Some(project) = self.request(Operation::CreateProject, self.api.create_project(name)).await {
            log::info!("[Controller] Created project {} ({})", project.name, project.id);
            let id = project.id.clone();
            self.state.update(|s| s.push_project(project));
            self.change_project(Some(id)).await;
        }
    }

    /// Delete the current project after confirmation
    pub async fn delete_project(&self) {
        let Some((id, name)) = self.state.with(|s| {
            let id = s.current_project.clone()?;
            let name = s.current_project().map(|p| p.name.clone()).unwrap_or_default();
            Some((id, name))
        }) else {
            return;
        };
        let message = format!("Delete project \"{}\" and all of its todos?", name);
        if !self.host.confirm(&message) {
            return;
        }

        if self.request(Operation::DeleteProject, self.api.delete_project(&id)).await.is_some() {
            log::info!("[Controller] Deleted project {}", id);
            self.state.update(|s| s.remove_project(&id));
        }
    }

    /// Switch to `selection`, or hide the list when nothing is selected.
    ///
    /// The current project only changes once its todos have arrived.
    pub async fn change_project(&self, selection: Option<RecordId>) {
        let Some(id) = selection else {
            self.state.update(AppState::hide_todo_view);
            return;
        };

        log::debug!("[Controller] Loading todos for project {}", id);
        if let Some(todos) = self.request(Operation::LoadTodos, self.api.get_todos(&id)).await {
            log::debug!("[Controller] Loaded {} todos", todos.len());
            self.state.update(|s| s.select_project(id, todos));
        }
    }

    pub fn set_draft(&self, text: String) {
        self.state.update(|s| s.draft = text);
    }

    /// Create a todo from the input box contents
    pub async fn add_todo(&self) {
        let Some((project_id, text)) = self.state.with(|s| {
            let text = s.draft.trim();
            if text.is_empty() {
                return None;
            }
            Some((s.current_project.clone()?, text.to_string()))
        }) else {
            return;
        };

        let new_todo = NewTodo { text: &text, completed: false };
        if let Some(todo) = self.request(Operation::AddTodo, self.api.create_todo(&project_id, &new_todo)).await {
            self.state.update(|s| {
                if s.current_project.as_ref() == Some(&project_id) {
                    s.push_todo(todo);
                    s.draft.clear();
                }
            });
        }
    }

    /// Flip a todo's completed flag on the server and adopt its answer
    pub async fn toggle_todo(&self, id: &RecordId) {
        let Some((project_id, completed)) = self.state.with(|s| {
            let todo = s.find_todo(id)?;
            Some((s.current_project.clone()?, todo.completed))
        }) else {
            return;
        };

        let patch = TodoPatch::completed(!completed);
        if let Some(updated) = self
            .request(Operation::UpdateTodo, self.api.update_todo(&project_id, id, &patch))
            .await
        {
            self.state.update(|s| {
                if s.current_project.as_ref() == Some(&project_id) {
                    s.replace_todo(id, updated);
                }
            });
        }
    }

    pub async fn delete_todo(&self, id: &RecordId) {
        let Some(project_id) = self.state.with(|s| s.current_project.clone()) else {
            return;
        };

        if self
            .request(Operation::DeleteTodo, self.api.delete_todo(&project_id, id))
            .await
            .is_some()
        {
            self.state.update(|s| {
                if s.current_project.as_ref() == Some(&project_id) {
                    s.remove_todo(id);
                }
            });
        }
    }

    pub fn set_filter(&self, filter: Filter) {
        self.state.update(|s| s.filter = filter);
    }

    pub fn toggle_theme(&self) {
        let theme = self.state.with(|s| s.theme.toggled());
        self.state.update(|s| s.theme = theme);
        self.host.store_preference(&self.config.theme_key, theme.as_str());
        self.host.apply_theme(theme);
    }

    /// Close the banner before its timer runs out
    pub fn dismiss_banner(&self) {
        self.state.update(|s| s.banner = None);
    }

    // ========================
    // Request plumbing
    // ========================

    /// Await `call` with the loading indicator up. Failures are logged and
    /// turned into the operation's banner; `None` means leave state alone.
    async fn request<T>(
        &self,
        op: Operation,
        call: impl Future<Output = Result<T, ApiError>>,
    ) -> Option<T> {
        self.state.update(AppState::begin_request);
        let result = call.await;
        self.state.update(AppState::end_request);

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[Controller] {:?} failed: {}", op, e);
                self.show_error(op.failure_message());
                None
            }
        }
    }

    fn show_error(&self, message: &str) {
        let mut banner_id = 0;
        self.state.update(|s| banner_id = s.show_banner(message));

        let state = self.state.clone();
        self.host.run_after(
            self.config.banner_timeout,
            Box::new(move || state.update(|s| s.dismiss_banner(banner_id))),
        );
    }
}
