//! Filter Bar Component

use leptos::prelude::*;
use todo_core::Filter;

use crate::context::use_app_context;

/// All / Active / Completed buttons; the active one is highlighted
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    view! {
        <div class="filter-bar">
            {Filter::ALL.into_iter().map(|filter| {
                let controller = ctx.controller.clone();
                let is_active = move || state.with(|s| s.filter == filter);
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |_| controller.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
