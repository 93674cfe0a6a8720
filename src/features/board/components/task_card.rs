use leptos::prelude::*;

use crate::models::{Stage, Task};

/// A draggable task card. Shows the content with a grip, edit and delete
/// controls, plus two redundant paths to the board operations: a stage
/// selector (same mutation as drag-and-drop) and a per-task color picker.
///
/// The edit buffer is shared board-wide: starting an edit here silently
/// replaces any other card's uncommitted buffer, and blur commits.
#[component]
pub fn TaskCard(
    task: Task,
    editing: RwSignal<Option<Task>>,
    #[prop(into)] on_move: Callback<(String, Stage)>,
    #[prop(into)] on_change_color: Callback<(String, String)>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_commit_edit: Callback<Task>,
) -> impl IntoView {
    let task_for_edit = task.clone();
    let id_for_editing = task.id.clone();
    let id_for_drag = task.id.clone();
    let id_for_select = task.id.clone();
    let id_for_color = task.id.clone();
    let id_for_delete = task.id.clone();

    // Memoized so keystrokes in the edit buffer update the input's value in
    // place instead of recreating the input (which would drop focus).
    let is_editing = Memo::new(move |_| {
        editing.with(|e| e.as_ref().is_some_and(|t| t.id == id_for_editing))
    });

    view! {
        <div
            class="task-card"
            style:background-color=task.color.clone()
            draggable="true"
            on:dragstart=move |ev: web_sys::DragEvent| {
                if let Some(data) = ev.data_transfer() {
                    let _ = data.set_data("taskId", &id_for_drag);
                }
            }
        >
            {move || {
                if is_editing.get() {
                    view! {
                        <input
                            type="text"
                            class="task-edit-input"
                            prop:value=move || {
                                editing
                                    .with(|e| {
                                        e.as_ref().map(|t| t.content.clone()).unwrap_or_default()
                                    })
                            }
                            on:input=move |ev| {
                                editing
                                    .update(|e| {
                                        if let Some(t) = e.as_mut() {
                                            t.content = event_target_value(&ev);
                                        }
                                    })
                            }
                            on:blur=move |_| {
                                if let Some(buffer) = editing.get_untracked() {
                                    on_commit_edit.run(buffer);
                                }
                                editing.set(None);
                            }
                        />
                    }
                        .into_any()
                } else {
                    let task_for_click = task_for_edit.clone();
                    let id_for_click = id_for_delete.clone();
                    view! {
                        <div class="task-card-body">
                            <span class="task-grip">"⠿"</span>
                            <span class="task-content">{task_for_edit.content.clone()}</span>
                            <div class="task-actions">
                                <button
                                    class="icon-btn edit-btn"
                                    title="Edit task"
                                    on:click=move |_| {
                                        editing.set(Some(task_for_click.clone()));
                                    }
                                >
                                    "✎"
                                </button>
                                <button
                                    class="icon-btn delete-btn"
                                    title="Delete task"
                                    on:click=move |_| {
                                        on_delete.run(id_for_click.clone());
                                    }
                                >
                                    "🗑"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
            <div class="task-card-footer">
                <select
                    class="stage-select"
                    on:change=move |ev| {
                        if let Some(stage) = Stage::from_tag(&event_target_value(&ev)) {
                            on_move.run((id_for_select.clone(), stage));
                        }
                    }
                >
                    {Stage::all()
                        .into_iter()
                        .map(|stage| {
                            view! {
                                <option value=stage.tag() selected={stage == task.stage}>
                                    {stage.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    type="color"
                    class="color-picker"
                    prop:value=task.color.clone()
                    on:change=move |ev| {
                        on_change_color.run((id_for_color.clone(), event_target_value(&ev)));
                    }
                />
            </div>
        </div>
    }
}
