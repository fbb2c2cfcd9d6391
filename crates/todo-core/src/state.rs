//! Application State
//!
//! The single value every view reads from. Mutated only through the helper
//! methods below, always after a request has resolved.

use std::cell::RefCell;
use std::rc::Rc;

use crate::filter::Filter;
use crate::model::{Project, RecordId, Todo};
use crate::theme::Theme;

/// Transient error message shown above the list
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Increments per banner so a timed dismissal only removes its own
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Mirror of the server's project list
    pub projects: Vec<Project>,
    /// Project whose todos are loaded
    pub current_project: Option<RecordId>,
    /// Todos of `current_project` only
    pub todos: Vec<Todo>,
    pub filter: Filter,
    pub theme: Theme,
    pub todo_view_visible: bool,
    /// Contents of the new-todo input
    pub draft: String,
    /// In-flight requests; loading indicator is shown while non-zero
    pub pending: u32,
    pub banner: Option<Banner>,
    next_banner_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn current_project(&self) -> Option<&Project> {
        let id = self.current_project.as_ref()?;
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn find_todo(&self, id: &RecordId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    // ========================
    // Projects
    // ========================

    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn push_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Make `id` current with its freshly fetched todos and show the list
    pub fn select_project(&mut self, id: RecordId, todos: Vec<Todo>) {
        self.current_project = Some(id);
        self.todos = todos;
        self.todo_view_visible = true;
    }

    /// Drop a deleted project; clears the selection if it was current
    pub fn remove_project(&mut self, id: &RecordId) {
        self.projects.retain(|p| &p.id != id);
        if self.current_project.as_ref() == Some(id) {
            self.current_project = None;
            self.todos.clear();
            self.todo_view_visible = false;
        }
    }

    pub fn hide_todo_view(&mut self) {
        self.todo_view_visible = false;
    }

    // ========================
    // Todos
    // ========================

    pub fn push_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Replace the entry with `id` by the server's copy; unknown ids are ignored
    pub fn replace_todo(&mut self, id: &RecordId, updated: Todo) {
        if let Some(todo) = self.todos.iter_mut().find(|t| &t.id == id) {
            *todo = updated;
        }
    }

    pub fn remove_todo(&mut self, id: &RecordId) {
        self.todos.retain(|t| &t.id != id);
    }

    // ========================
    // Loading and banner
    // ========================

    pub fn begin_request(&mut self) {
        self.pending += 1;
    }

    pub fn end_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Show `message`, replacing any current banner. Returns the banner id.
    pub fn show_banner(&mut self, message: &str) -> u64 {
        self.next_banner_id += 1;
        self.banner = Some(Banner {
            id: self.next_banner_id,
            message: message.to_string(),
        });
        self.next_banner_id
    }

    /// Remove the banner only if it is still the one with `id`
    pub fn dismiss_banner(&mut self, id: u64) {
        if self.banner.as_ref().map(|b| b.id) == Some(id) {
            self.banner = None;
        }
    }
}

/// Shared handle onto the one `AppState`.
///
/// Implementations must not hold a borrow across calls; the controller
/// never keeps one across an `.await`.
pub trait StateCell: Clone + 'static {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut AppState));
}

impl StateCell for Rc<RefCell<AppState>> {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&*self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut *self.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, name: &str) -> Project {
        Project { id: RecordId::Int(id), name: name.to_string() }
    }

    fn todo(id: i64, completed: bool) -> Todo {
        Todo { id: RecordId::Int(id), text: format!("Todo {}", id), completed }
    }

    #[test]
    fn test_remove_current_project_clears_selection() {
        let mut state = AppState::new();
        state.replace_projects(vec![project(1, "Work"), project(2, "Home")]);
        state.select_project(RecordId::Int(1), vec![todo(10, false)]);
        assert_eq!(state.current_project().map(|p| p.name.as_str()), Some("Work"));

        state.remove_project(&RecordId::Int(2));
        assert_eq!(state.current_project, Some(RecordId::Int(1)));
        assert_eq!(state.todos.len(), 1);

        state.remove_project(&RecordId::Int(1));
        assert!(state.projects.is_empty());
        assert!(state.current_project.is_none());
        assert!(state.todos.is_empty());
        assert!(!state.todo_view_visible);
    }

    #[test]
    fn test_replace_todo_touches_only_match() {
        let mut state = AppState::new();
        state.select_project(RecordId::Int(1), vec![todo(1, false), todo(2, false)]);

        state.replace_todo(&RecordId::Int(2), todo(2, true));
        state.replace_todo(&RecordId::Int(99), todo(99, true));

        assert_eq!(state.todos, vec![todo(1, false), todo(2, true)]);
    }

    #[test]
    fn test_stale_banner_dismissal_is_ignored() {
        let mut state = AppState::new();
        let first = state.show_banner("Failed to load projects");
        let second = state.show_banner("Failed to add todo");
        assert_ne!(first, second);

        state.dismiss_banner(first);
        assert_eq!(state.banner.as_ref().map(|b| b.message.as_str()), Some("Failed to add todo"));

        state.dismiss_banner(second);
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_pending_counter() {
        let mut state = AppState::new();
        state.begin_request();
        state.begin_request();
        state.end_request();
        assert!(state.is_loading());
        state.end_request();
        state.end_request();
        assert!(!state.is_loading());
    }
}
