use crate::domain::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Wire record for persisted tasks.
///
/// Field names match the `taskObjects` layout on disk, so a pre-existing
/// value loads unchanged. No schema version field; format changes are not
/// migrated.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StoredTask {
    pub id: u64,
    #[serde(rename = "taskTitle")]
    pub task_title: String,
    #[serde(rename = "taskDescription")]
    pub task_description: String,
    #[serde(rename = "taskComplete")]
    pub task_complete: bool,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            task_title: task.title.clone(),
            task_description: task.description.clone(),
            task_complete: task.complete,
        }
    }
}

impl From<StoredTask> for Task {
    fn from(stored: StoredTask) -> Self {
        Self {
            id: TaskId(stored.id),
            title: stored.task_title,
            description: stored.task_description,
            complete: stored.task_complete,
        }
    }
}

pub(crate) fn to_wire_json(tasks: &[Task]) -> serde_json::Result<String> {
    let stored: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
    serde_json::to_string(&stored)
}

/// Parse persisted text. Corrupt data is treated as absent with a warning,
/// never as a fatal error.
pub(crate) fn from_wire_json(content: &str) -> Vec<Task> {
    match serde_json::from_str::<Vec<StoredTask>>(content) {
        Ok(stored) => stored.into_iter().map(Task::from).collect(),
        Err(e) => {
            tracing::warn!("Stored tasks are not valid JSON, treating as empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_persisted_field_names() {
        let task = Task {
            id: TaskId(42),
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            complete: true,
        };
        let json = to_wire_json(std::slice::from_ref(&task)).unwrap();
        // Persisted as one compact line
        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], 42);
        assert_eq!(value[0]["taskTitle"], "Buy milk");
        assert_eq!(value[0]["taskDescription"], "2%");
        assert_eq!(value[0]["taskComplete"], true);
    }

    #[test]
    fn corrupt_text_parses_as_empty() {
        assert!(from_wire_json("not json at all").is_empty());
        assert!(from_wire_json("{\"wrong\": \"shape\"}").is_empty());
    }
}
