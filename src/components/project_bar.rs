//! Project Bar Component
//!
//! Project selector plus create/delete buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::Project;

use crate::context::use_app_context;

/// Project selector with new/delete actions
#[component]
pub fn ProjectBar() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    // Option value of the project shown as selected ("" = placeholder)
    let selected_value = move || {
        state.with(|s| match (&s.current_project, s.todo_view_visible) {
            (Some(id), true) => id.to_string(),
            _ => String::new(),
        })
    };

    let on_change = {
        let controller = ctx.controller.clone();
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            let selection = state.with_untracked(|s| {
                s.projects
                    .iter()
                    .find(|p| p.id.to_string() == value)
                    .map(|p| p.id.clone())
            });
            let controller = controller.clone();
            spawn_local(async move {
                controller.change_project(selection).await;
            });
        }
    };

    let on_new = {
        let controller = ctx.controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.create_project().await;
            });
        }
    };

    let on_delete = {
        let controller = ctx.controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.delete_project().await;
            });
        }
    };

    view! {
        <div class="project-bar">
            <select id="project-select" on:change=on_change>
                <option value="" prop:selected=move || selected_value().is_empty()>
                    "-- Select a project --"
                </option>
                <For
                    each=move || state.with(|s| s.projects.clone())
                    key=|project| project.id.clone()
                    children=move |project: Project| {
                        let value = project.id.to_string();
                        let option_value = value.clone();
                        view! {
                            <option
                                value=option_value
                                prop:selected=move || selected_value() == value
                            >
                                {project.name}
                            </option>
                        }
                    }
                />
            </select>
            <button id="new-project-btn" on:click=on_new>"+ New Project"</button>
            <button
                id="delete-project-btn"
                disabled=move || state.with(|s| s.current_project.is_none())
                on:click=on_delete
            >
                "Delete Project"
            </button>
        </div>
    }
}
