//! Todo List Component
//!
//! Draws `render(todos, filter)`: one row per visible todo and the
//! remaining-task counter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{render, TodoRow};

use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;
    let controller = ctx.controller;

    // Only changes when the rendered output does
    let list_view = Memo::new(move |_| state.with(|s| render(&s.todos, s.filter)));

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || list_view.get().rows
                key=|row| (row.id.clone(), row.text.clone(), row.completed)
                children=move |row: TodoRow| {
                    let toggle_id = row.id.clone();
                    let delete_id = row.id.clone();
                    let toggle_controller = controller.clone();
                    let delete_controller = controller.clone();

                    view! {
                        <li class=if row.completed { "todo-item completed" } else { "todo-item" }>
                            <input
                                type="checkbox"
                                class="todo-checkbox"
                                prop:checked=row.completed
                                on:click=move |ev: web_sys::MouseEvent| {
                                    // the row is redrawn from the server's answer
                                    ev.prevent_default();
                                    let controller = toggle_controller.clone();
                                    let id = toggle_id.clone();
                                    spawn_local(async move {
                                        controller.toggle_todo(&id).await;
                                    });
                                }
                            />
                            <span class="todo-text">{row.text}</span>
                            <button
                                class="delete-btn"
                                title="Delete"
                                on:click=move |_| {
                                    let controller = delete_controller.clone();
                                    let id = delete_id.clone();
                                    spawn_local(async move {
                                        controller.delete_todo(&id).await;
                                    });
                                }
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
        <p id="todo-count" class="todo-count">{move || list_view.get().counter}</p>
    }
}
