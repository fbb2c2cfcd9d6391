//! Project Todos Core
//!
//! Framework-independent half of the front end: records, the API client,
//! application state, the list view model and the controller operations.
//! The Leptos crate supplies a `StateCell` backed by a signal and a `Host`
//! backed by the browser.

pub mod api;
pub mod config;
pub mod controller;
pub mod filter;
pub mod http;
pub mod model;
pub mod state;
pub mod theme;
pub mod view;

pub use api::{ApiError, TodoApi};
pub use config::AppConfig;
pub use controller::{Controller, Host, Operation};
pub use filter::Filter;
pub use http::HttpApi;
pub use model::{NewTodo, Project, RecordId, Todo, TodoPatch};
pub use state::{AppState, Banner, StateCell};
pub use theme::Theme;
pub use view::{render, TodoListView, TodoRow};
