//! Authoritative mutations over the task collection.
//!
//! Every UI entry point converges here: drag-and-drop and the per-card stage
//! selector both call `move_task`, the inline editor commits through
//! `commit_edit`, and so on. Each function returns whether it changed (or, for
//! same-stage moves, touched) the collection, which is what the board hook
//! uses to decide whether to write the collection through to storage.

use crate::models::{Stage, Task};

/// Color assigned to the composer's picker after a task is added.
pub const DEFAULT_TASK_COLOR: &str = "#ffffff";

/// Append a new task at the Start stage. Blank (whitespace-only) content is a
/// silent no-op; non-blank content is stored untrimmed.
pub fn add_task(tasks: &mut Vec<Task>, content: &str, color: &str) -> bool {
    if content.trim().is_empty() {
        return false;
    }
    tasks.push(Task::new(content.to_string(), color.to_string()));
    true
}

/// Move a task to any stage, including the one it is already in. Returns true
/// whenever the id exists so that same-stage moves still persist.
pub fn move_task(tasks: &mut [Task], task_id: &str, stage: Stage) -> bool {
    match tasks.iter_mut().find(|t| t.id == task_id) {
        Some(task) => {
            task.stage = stage;
            true
        }
        None => false,
    }
}

/// Replace the task matching the edit buffer's id with the buffer's value.
/// A buffer whose task was deleted mid-edit is a silent no-op, never an
/// insert.
pub fn commit_edit(tasks: &mut [Task], edited: &Task) -> bool {
    match tasks.iter_mut().find(|t| t.id == edited.id) {
        Some(task) => {
            *task = edited.clone();
            true
        }
        None => false,
    }
}

/// Recolor a task. The color value is taken as-is, no format validation.
pub fn change_color(tasks: &mut [Task], task_id: &str, color: &str) -> bool {
    match tasks.iter_mut().find(|t| t.id == task_id) {
        Some(task) => {
            task.color = color.to_string();
            true
        }
        None => false,
    }
}

/// Remove the task with the matching id; unknown ids are a silent no-op.
pub fn delete_task(tasks: &mut Vec<Task>, task_id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != task_id);
    tasks.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: "a".to_string(),
                content: "first".to_string(),
                stage: Stage::Start,
                color: "#ffffff".to_string(),
            },
            Task {
                id: "b".to_string(),
                content: "second".to_string(),
                stage: Stage::InProgress,
                color: "#ff0000".to_string(),
            },
        ]
    }

    #[test]
    fn add_task_rejects_blank_content() {
        let mut tasks = sample_tasks();
        assert!(!add_task(&mut tasks, "", "#ffffff"));
        assert!(!add_task(&mut tasks, "   \t", "#ffffff"));
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn add_task_appends_one_start_task_with_untrimmed_content() {
        let mut tasks = sample_tasks();
        assert!(add_task(&mut tasks, "  Buy milk ", "#ff0000"));
        assert_eq!(tasks.len(), 3);
        let added = tasks.last().unwrap();
        assert_eq!(added.content, "  Buy milk ");
        assert_eq!(added.stage, Stage::Start);
        assert_eq!(added.color, "#ff0000");
        assert!(tasks.iter().filter(|t| t.id == added.id).count() == 1);
    }

    #[test]
    fn move_task_reaches_every_stage_from_every_stage() {
        for from in Stage::all() {
            for to in Stage::all() {
                let mut tasks = sample_tasks();
                tasks[0].stage = from;
                assert!(move_task(&mut tasks, "a", to));
                assert_eq!(tasks[0].stage, to);
            }
        }
    }

    #[test]
    fn move_task_same_stage_changes_nothing_but_reports_touched() {
        let mut tasks = sample_tasks();
        let snapshot = tasks.clone();
        assert!(move_task(&mut tasks, "b", Stage::InProgress));
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn move_task_unknown_id_is_a_no_op() {
        let mut tasks = sample_tasks();
        let snapshot = tasks.clone();
        assert!(!move_task(&mut tasks, "missing", Stage::Done));
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn commit_edit_replaces_matching_task_only() {
        let mut tasks = sample_tasks();
        let mut edited = tasks[0].clone();
        edited.content = "rewritten".to_string();
        assert!(commit_edit(&mut tasks, &edited));
        assert_eq!(tasks[0].content, "rewritten");
        assert_eq!(tasks[1].content, "second");
    }

    #[test]
    fn commit_edit_after_delete_never_inserts() {
        let mut tasks = sample_tasks();
        let mut edited = tasks[0].clone();
        edited.content = "orphaned".to_string();
        assert!(delete_task(&mut tasks, "a"));
        assert!(!commit_edit(&mut tasks, &edited));
        assert_eq!(tasks.len(), 1);
        assert!(tasks.iter().all(|t| t.id != "a"));
    }

    #[test]
    fn change_color_updates_only_the_color_field() {
        let mut tasks = sample_tasks();
        assert!(change_color(&mut tasks, "b", "#0000ff"));
        assert_eq!(tasks[1].color, "#0000ff");
        assert_eq!(tasks[1].content, "second");
        assert_eq!(tasks[1].stage, Stage::InProgress);
        assert!(!change_color(&mut tasks, "missing", "#0000ff"));
    }

    #[test]
    fn delete_task_removes_exactly_one_and_ignores_unknown_ids() {
        let mut tasks = sample_tasks();
        assert!(delete_task(&mut tasks, "a"));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "b");

        let snapshot = tasks.clone();
        assert!(!delete_task(&mut tasks, "a"));
        assert_eq!(tasks, snapshot);
    }
}
