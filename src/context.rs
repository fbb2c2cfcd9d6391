//! Application Context
//!
//! Shared state and controller provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{AppState, Controller, HttpApi, StateCell};

use crate::host::BrowserHost;

/// `StateCell` over the app signal; every update notifies the views
#[derive(Clone, Copy)]
pub struct SignalState(pub RwSignal<AppState>);

impl StateCell for SignalState {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        self.0.update(f);
    }
}

pub type AppController = Controller<HttpApi, SignalState, BrowserHost>;

/// App-wide state and operations
#[derive(Clone)]
pub struct AppContext {
    /// Read side for views
    pub state: RwSignal<AppState>,
    /// All mutations go through here
    pub controller: AppController,
}

impl AppContext {
    pub fn new(state: RwSignal<AppState>, controller: AppController) -> Self {
        Self { state, controller }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
