//! Todo Input Component
//!
//! Text box and add button; Enter also adds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let add = {
        let controller = ctx.controller.clone();
        move || {
            let controller = controller.clone();
            spawn_local(async move {
                controller.add_todo().await;
            });
        }
    };
    let add_on_enter = add.clone();

    let on_input = {
        let controller = ctx.controller.clone();
        move |ev: web_sys::Event| controller.set_draft(event_target_value(&ev))
    };

    view! {
        <div class="todo-input-row">
            <input
                id="todo-input"
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || state.with(|s| s.draft.clone())
                on:input=on_input
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_on_enter();
                    }
                }
            />
            <button id="add-btn" on:click=move |_| add()>"Add"</button>
        </div>
    }
}
