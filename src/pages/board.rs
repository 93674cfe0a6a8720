use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::core::services::storage;
use crate::features::board::components::{
    BoardColumn, ExportPanel, Notice, NoticeBanner, TaskCard, TaskComposer,
};
use crate::features::board::hooks::{use_board, BoardHook};
use crate::models::{Stage, Task};

#[component]
pub fn Board() -> impl IntoView {
    let BoardHook {
        tasks,
        add_task,
        move_task,
        commit_edit,
        change_color,
        delete_task,
        replace_tasks,
    } = use_board();

    // At most one task is in edit mode at a time; beginning a new edit
    // silently replaces any uncommitted buffer.
    let editing = RwSignal::new(None::<Task>);
    let export_text = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);

    let notify = Callback::new(move |n: Notice| notice.set(Some(n)));

    let generate_export = move |_| {
        match storage::serialize_tasks(&tasks.get_untracked()) {
            Ok(text) => export_text.set(text),
            Err(e) => notify.run(Notice::error(e)),
        }
    };

    // Import replaces the whole collection at read-completion time
    // (last-writer-wins); a failed parse leaves the board untouched.
    let import_tasks = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Reset so picking the same file again re-fires the change event.
        input.set_value("");
        spawn_local(async move {
            let text = match JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    web_sys::console::error_1(&e);
                    notify.run(Notice::error("Could not read the selected file"));
                    return;
                }
            };
            match storage::parse_tasks(&text) {
                Ok(loaded) => {
                    replace_tasks.run(loaded);
                    notify.run(Notice::success("Tasks loaded"));
                }
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    notify.run(Notice::error(
                        "Invalid file format. Please select a valid JSON export.",
                    ));
                }
            }
        });
    };

    view! {
        <div class="board-page">
            <NoticeBanner notice=notice />

            <section class="board-controls">
                <TaskComposer on_add=add_task />
                <div class="board-toolbar">
                    <button class="btn-secondary" on:click=generate_export>
                        "Generate Save Text"
                    </button>
                    <label class="file-label">
                        "Load Tasks"
                        <input
                            type="file"
                            class="file-input"
                            accept=".json,text/plain"
                            on:change=import_tasks
                        />
                    </label>
                </div>
                <ExportPanel export_text=export_text notify=notify />
            </section>

            <div class="board-columns">
                {Stage::all()
                    .into_iter()
                    .map(|stage| {
                        let on_drop_task = Callback::new(move |task_id: String| {
                            move_task.run((task_id, stage));
                        });
                        view! {
                            <BoardColumn stage=stage tasks=tasks on_drop_task=on_drop_task>
                                {move || {
                                    tasks
                                        .with(|tasks| {
                                            tasks
                                                .iter()
                                                .filter(|task| task.stage == stage)
                                                .cloned()
                                                .map(|task| {
                                                    view! {
                                                        <TaskCard
                                                            task=task
                                                            editing=editing
                                                            on_move=move_task
                                                            on_change_color=change_color
                                                            on_delete=delete_task
                                                            on_commit_edit=commit_edit
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                }}
                            </BoardColumn>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
