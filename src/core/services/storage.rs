use crate::models::Task;

/// The single localStorage slot holding the serialized task collection.
pub const STORAGE_KEY: &str = "tasks";

/// Serialize the collection to the shared wire format. The same text is used
/// for the persistence slot and for the export panel.
pub fn serialize_tasks(tasks: &[Task]) -> Result<String, String> {
    serde_json::to_string(tasks).map_err(|e| format!("Failed to serialize tasks: {}", e))
}

/// Parse text in the wire format back into a collection. Malformed JSON, a
/// missing field, a wrong field type or an unknown stage tag are all
/// rejections; the caller keeps its current collection on Err.
pub fn parse_tasks(raw: &str) -> Result<Vec<Task>, String> {
    serde_json::from_str(raw).map_err(|e| format!("Invalid task data: {}", e))
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// One-time startup hydration. A missing slot yields an empty board; a
/// corrupt slot is logged and also yields an empty board rather than a crash.
pub fn load_tasks() -> Vec<Task> {
    let Some(storage) = local_storage() else {
        web_sys::console::error_1(&"localStorage is not available".into());
        return Vec::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => match parse_tasks(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Ignoring corrupt saved tasks: {}", e).into(),
                );
                Vec::new()
            }
        },
        _ => Vec::new(),
    }
}

/// Write-through persistence: the full current collection overwrites the slot
/// after every mutating operation. localStorage writes are synchronous, so
/// successive writes land in operation order.
pub fn save_tasks(tasks: &[Task]) {
    let Some(storage) = local_storage() else {
        web_sys::console::error_1(&"localStorage is not available".into());
        return;
    };
    match serialize_tasks(tasks) {
        Ok(raw) => {
            if storage.set_item(STORAGE_KEY, &raw).is_err() {
                web_sys::console::error_1(&"Failed to write tasks to localStorage".into());
            }
        }
        Err(e) => web_sys::console::error_1(&e.into()),
    }
}
