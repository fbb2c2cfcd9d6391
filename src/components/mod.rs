//! UI Components
//!
//! Leptos components; each reads `AppState` from context and calls the
//! controller for anything that changes it.

mod filter_bar;
mod project_bar;
mod status;
mod theme_toggle;
mod todo_input;
mod todo_list;

pub use filter_bar::FilterBar;
pub use project_bar::ProjectBar;
pub use status::{ErrorBanner, LoadingIndicator};
pub use theme_toggle::ThemeToggle;
pub use todo_input::TodoInput;
pub use todo_list::TodoList;
