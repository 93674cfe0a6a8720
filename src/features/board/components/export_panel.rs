use leptos::prelude::*;

use crate::core::services::clipboard;
use crate::features::board::components::Notice;

/// Read-only view of the generated export text with copy and close controls.
/// Hidden while the export-text signal is empty; close just clears it.
#[component]
pub fn ExportPanel(
    export_text: RwSignal<String>,
    #[prop(into)] notify: Callback<Notice>,
) -> impl IntoView {
    let on_copied = Callback::new(move |result: Result<(), String>| match result {
        Ok(()) => notify.run(Notice::success("Tasks copied to clipboard")),
        Err(e) => notify.run(Notice::error(e)),
    });

    view! {
        {move || {
            let text = export_text.get();
            (!text.is_empty())
                .then(|| {
                    let text_for_copy = text.clone();
                    view! {
                        <div class="export-panel">
                            <textarea readonly rows="3" prop:value=text.clone()></textarea>
                            <div class="export-actions">
                                <button
                                    class="btn-primary"
                                    on:click=move |_| {
                                        clipboard::copy_text(text_for_copy.clone(), on_copied);
                                    }
                                >
                                    "Copy to Clipboard"
                                </button>
                                <button
                                    class="btn-secondary"
                                    on:click=move |_| export_text.set(String::new())
                                >
                                    "Close"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
