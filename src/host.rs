//! Browser Host
//!
//! Dialogs, localStorage and timers for the controller.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use todo_core::{Host, Theme};
use web_sys::Storage;

#[derive(Clone, Copy, Default)]
pub struct BrowserHost;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl Host for BrowserHost {
    fn prompt(&self, message: &str) -> Option<String> {
        web_sys::window()?.prompt_with_message(message).ok().flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn load_preference(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn store_preference(&self, key: &str, value: &str) {
        let stored = local_storage().map(|s| s.set_item(key, value).is_ok());
        if stored != Some(true) {
            log::warn!("[Host] Could not persist {}={}", key, value);
        }
    }

    fn apply_theme(&self, theme: Theme) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if root.set_attribute("data-theme", theme.as_str()).is_err() {
                log::warn!("[Host] Could not apply theme {}", theme.as_str());
            }
        }
    }

    fn run_after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            task();
        });
    }
}
