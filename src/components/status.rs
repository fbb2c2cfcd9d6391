//! Status Components
//!
//! Loading indicator and the transient error banner.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let state = use_app_context().state;

    view! {
        <Show when=move || state.with(|s| s.is_loading())>
            <div id="loading" class="loading">"Loading..."</div>
        </Show>
    }
}

/// Error banner above the list; the controller removes it after a delay
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;
    let controller = ctx.controller;

    move || {
        state.with(|s| s.banner.clone()).map(|banner| {
            let controller = controller.clone();
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-message">{banner.message}</span>
                    <button class="banner-close" on:click=move |_| controller.dismiss_banner()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
