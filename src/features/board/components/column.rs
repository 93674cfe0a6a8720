use leptos::prelude::*;

use crate::models::{Stage, Task};

/// One stage column: header with a live task count, and a drop target that
/// resolves a dragged card's id into a move to this column's stage.
#[component]
pub fn BoardColumn(
    stage: Stage,
    #[prop(into)] tasks: ReadSignal<Vec<Task>>,
    #[prop(into)] on_drop_task: Callback<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="board-column"
            on:dragover=move |ev| ev.prevent_default()
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                if let Some(data) = ev.data_transfer() {
                    if let Ok(task_id) = data.get_data("taskId") {
                        if !task_id.is_empty() {
                            on_drop_task.run(task_id);
                        }
                    }
                }
            }
        >
            <div class="column-header">
                <h2>{stage.label()}</h2>
                <span class="task-count">
                    {move || {
                        tasks.with(|tasks| tasks.iter().filter(|t| t.stage == stage).count())
                    }}
                </span>
            </div>
            <div class="column-content">{children()}</div>
        </div>
    }
}
