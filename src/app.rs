//! Project Todos Frontend App
//!
//! Project selector on top, todo list for the current project below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{AppConfig, AppState, Controller, HttpApi};

use crate::components::{ErrorBanner, FilterBar, LoadingIndicator, ProjectBar, ThemeToggle, TodoInput, TodoList};
use crate::context::{AppContext, SignalState};
use crate::host::BrowserHost;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let state = RwSignal::new(AppState::new());

    let api = HttpApi::new(&config.api_base);
    log::info!("[APP] Using todo API at {}", api.base_url());
    let controller = Controller::new(api, SignalState(state), BrowserHost, config);

    // Provide context to all children
    provide_context(AppContext::new(state, controller.clone()));

    // Apply stored theme and load projects on mount
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.init().await;
        });
    });

    let todo_view_visible = move || state.with(|s| s.todo_view_visible);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Project Todos"</h1>
                <ThemeToggle />
            </header>

            <ProjectBar />
            <LoadingIndicator />

            <main class="main-content">
                <ErrorBanner />

                <Show when=todo_view_visible>
                    <section id="todo-view" class="todo-view">
                        <TodoInput />
                        <FilterBar />
                        <TodoList />
                    </section>
                </Show>
            </main>
        </div>
    }
}
