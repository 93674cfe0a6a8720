use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three fixed workflow stages a task moves through.
///
/// The snake_case tags ("start", "in_progress", "done") are the wire format
/// shared by the persistence slot, export text and import files, so an export
/// from one session re-imports cleanly into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    InProgress,
    Done,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Start => "Start",
            Stage::InProgress => "In Progress",
            Stage::Done => "Done",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Stage::Start => "start",
            Stage::InProgress => "in_progress",
            Stage::Done => "done",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Stage> {
        match tag {
            "start" => Some(Stage::Start),
            "in_progress" => Some(Stage::InProgress),
            "done" => Some(Stage::Done),
            _ => None,
        }
    }

    pub fn all() -> [Stage; 3] {
        [Stage::Start, Stage::InProgress, Stage::Done]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub stage: Stage,
    pub color: String,
}

impl Task {
    /// New tasks always enter the board at the Start stage with a fresh id.
    pub fn new(content: String, color: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            stage: Stage::Start,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_at_start_stage() {
        let task = Task::new("Buy milk".to_string(), "#ff0000".to_string());
        assert_eq!(task.stage, Stage::Start);
        assert_eq!(task.content, "Buy milk");
        assert_eq!(task.color, "#ff0000");
        assert!(!task.id.is_empty());
    }

    #[test]
    fn new_tasks_get_distinct_ids() {
        let a = Task::new("a".to_string(), "#ffffff".to_string());
        let b = Task::new("b".to_string(), "#ffffff".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn stage_serializes_to_snake_case_tags() {
        assert_eq!(serde_json::to_string(&Stage::Start).unwrap(), "\"start\"");
        assert_eq!(
            serde_json::to_string(&Stage::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(serde_json::to_string(&Stage::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn stage_rejects_unknown_tags() {
        assert!(serde_json::from_str::<Stage>("\"in_review\"").is_err());
    }

    #[test]
    fn tag_round_trips_through_from_tag() {
        for stage in Stage::all() {
            assert_eq!(Stage::from_tag(stage.tag()), Some(stage));
        }
        assert_eq!(Stage::from_tag("cancelled"), None);
    }

    #[test]
    fn task_wire_format_uses_stable_field_names() {
        let task = Task {
            id: "1".to_string(),
            content: "write docs".to_string(),
            stage: Stage::Done,
            color: "#00ff00".to_string(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "content": "write docs",
                "stage": "done",
                "color": "#00ff00",
            })
        );
    }
}
