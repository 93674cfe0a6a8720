use leptos::prelude::*;

use crate::core::services::storage;
use crate::features::board::services::task_operations as ops;
use crate::models::{Stage, Task};

/// Reactive handle to the board: the task list signal plus one callback per
/// mutating operation. Every callback applies the authoritative mutation and
/// then writes the full collection through to the persistence slot, so the
/// stored form never lags the in-memory one within a session.
pub struct BoardHook {
    pub tasks: ReadSignal<Vec<Task>>,
    /// Returns whether the task was actually added, so the composer knows
    /// whether to reset its input buffers.
    pub add_task: Callback<(String, String), bool>,
    pub move_task: Callback<(String, Stage)>,
    pub commit_edit: Callback<Task>,
    pub change_color: Callback<(String, String)>,
    pub delete_task: Callback<String>,
    /// Full-collection replace used by import; always persists.
    pub replace_tasks: Callback<Vec<Task>>,
}

pub fn use_board() -> BoardHook {
    // Hydrate once from the persistence slot. localStorage reads are
    // synchronous, so the board is complete before the first render.
    let tasks = RwSignal::new(storage::load_tasks());

    let persist = move || storage::save_tasks(&tasks.get_untracked());

    let add_task = Callback::new(move |(content, color): (String, String)| {
        let mut added = false;
        tasks.update(|list| added = ops::add_task(list, &content, &color));
        if added {
            persist();
        }
        added
    });

    let move_task = Callback::new(move |(task_id, stage): (String, Stage)| {
        let mut moved = false;
        tasks.update(|list| moved = ops::move_task(list, &task_id, stage));
        // Same-stage moves count as moved and still persist; unknown ids
        // are silent no-ops.
        if moved {
            persist();
        }
    });

    let commit_edit = Callback::new(move |edited: Task| {
        let mut committed = false;
        tasks.update(|list| committed = ops::commit_edit(list, &edited));
        if committed {
            persist();
        }
    });

    let change_color = Callback::new(move |(task_id, color): (String, String)| {
        let mut changed = false;
        tasks.update(|list| changed = ops::change_color(list, &task_id, &color));
        if changed {
            persist();
        }
    });

    let delete_task = Callback::new(move |task_id: String| {
        let mut removed = false;
        tasks.update(|list| removed = ops::delete_task(list, &task_id));
        if removed {
            persist();
        }
    });

    let replace_tasks = Callback::new(move |loaded: Vec<Task>| {
        tasks.set(loaded);
        persist();
    });

    BoardHook {
        tasks: tasks.read_only(),
        add_task,
        move_task,
        commit_edit,
        change_color,
        delete_task,
        replace_tasks,
    }
}
