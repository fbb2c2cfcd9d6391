//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;
    let controller = ctx.controller;

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| controller.toggle_theme()
        >
            {move || state.with(|s| s.theme.icon())}
        </button>
    }
}
