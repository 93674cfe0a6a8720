use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard. The clipboard API is promise-based,
/// so the write runs in a local task and the outcome is delivered through
/// `on_done`; callers surface both success and failure to the user.
pub fn copy_text(text: String, on_done: Callback<Result<(), String>>) {
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done.run(Err("Clipboard is not available".to_string()));
            return;
        };
        let clipboard = window.navigator().clipboard();
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_done.run(Ok(())),
            Err(e) => {
                web_sys::console::error_1(&e);
                on_done.run(Err("Could not copy to clipboard".to_string()));
            }
        }
    });
}
