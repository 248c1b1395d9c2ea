//! Clipboard access through the async Web Clipboard API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Copy `text`, then call `on_success` once the browser confirmed the write.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(e) => log::warn!("clipboard write failed: {:?}", e),
        }
    });
}

/// Copy `value` and mark it in `copied` for `feedback_ms`.
///
/// A later copy replaces the mark; the timer of the earlier one then leaves
/// it alone.
pub fn copy_with_feedback(value: String, copied: RwSignal<Option<String>>, feedback_ms: u32) {
    let marked = value.clone();
    copy_to_clipboard_with_callback(&value, move || {
        copied.set(Some(marked.clone()));
        spawn_local(async move {
            TimeoutFuture::new(feedback_ms).await;
            if copied.get_untracked().as_deref() == Some(marked.as_str()) {
                copied.set(None);
            }
        });
    });
}
