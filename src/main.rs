//! Project Todos Frontend Entry Point

mod app;
mod components;
mod context;
mod host;
mod logger;

use app::App;
use leptos::prelude::*;
use todo_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_overrides(option_env!("TODO_API_BASE"), option_env!("TODO_LOG_LEVEL"));
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
