use leptos::ev;
use leptos::prelude::*;

use crate::features::board::services::task_operations::DEFAULT_TASK_COLOR;

/// New-task form: text input, color picker, add button. The pending buffers
/// live here; they only reset when the add actually happens, so a blank
/// submission leaves the form untouched.
#[component]
pub fn TaskComposer(#[prop(into)] on_add: Callback<(String, String), bool>) -> impl IntoView {
    let (content, set_content) = signal(String::new());
    let (color, set_color) = signal(DEFAULT_TASK_COLOR.to_string());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if on_add.run((content.get_untracked(), color.get_untracked())) {
            set_content.set(String::new());
            set_color.set(DEFAULT_TASK_COLOR.to_string());
        }
    };

    view! {
        <form class="task-composer" on:submit=handle_submit>
            <input
                type="text"
                class="composer-input"
                placeholder="Enter new task"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            />
            <input
                type="color"
                class="color-picker"
                prop:value=move || color.get()
                on:input=move |ev| set_color.set(event_target_value(&ev))
            />
            <button type="submit" class="btn-primary">
                "Add Task"
            </button>
        </form>
    }
}
