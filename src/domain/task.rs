use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(n: u64) -> Self {
        TaskId(n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub complete: bool,
}

/// Validated title/description pair awaiting an id.
///
/// Business rule: a task exists only with non-empty (post-trim) title and
/// description, so validation happens here, before any id is drawn.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    title: String,
    description: String,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str) -> Option<Self> {
        if title.trim().is_empty() || description.trim().is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            complete: false,
        }
    }
}

impl Task {
    /// Returns `None` for empty (post-trim) title or description; new tasks
    /// start incomplete.
    pub fn new(id: TaskId, title: &str, description: &str) -> Option<Self> {
        TaskDraft::new(title, description).map(|draft| draft.into_task(id))
    }

    /// Business rule: get display status
    pub fn status_display(&self) -> &'static str {
        if self.complete {
            "Complete"
        } else {
            "Incomplete"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub complete: Option<bool>,
}

impl TaskUpdate {
    /// Build the full replacement record submitted to the store. An empty
    /// post-trim title or description keeps the existing field value.
    pub fn apply(&self, task: &Task) -> Task {
        let mut updated = task.clone();
        if let Some(title) = &self.title {
            if !title.trim().is_empty() {
                updated.title = title.clone();
            }
        }
        if let Some(description) = &self.description {
            if !description.trim().is_empty() {
                updated.description = description.clone();
            }
        }
        if let Some(complete) = self.complete {
            updated.complete = complete;
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new(TaskId(1), "Buy milk", "2%").unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2%");
        assert!(!task.complete);
    }

    #[test]
    fn empty_or_whitespace_fields_are_rejected() {
        assert!(Task::new(TaskId(1), "", "desc").is_none());
        assert!(Task::new(TaskId(1), "title", "").is_none());
        assert!(Task::new(TaskId(1), "   ", "desc").is_none());
        assert!(Task::new(TaskId(1), "title", "\t\n").is_none());
    }

    #[test]
    fn update_replaces_only_provided_fields() {
        let task = Task::new(TaskId(7), "title", "desc").unwrap();
        let updated = TaskUpdate {
            complete: Some(true),
            ..Default::default()
        }
        .apply(&task);
        assert_eq!(updated.id, TaskId(7));
        assert_eq!(updated.title, "title");
        assert_eq!(updated.description, "desc");
        assert!(updated.complete);
    }

    #[test]
    fn update_with_blank_text_keeps_existing_values() {
        let task = Task::new(TaskId(7), "title", "desc").unwrap();
        let updated = TaskUpdate {
            title: Some("  ".to_string()),
            description: Some("new desc".to_string()),
            complete: None,
        }
        .apply(&task);
        assert_eq!(updated.title, "title");
        assert_eq!(updated.description, "new desc");
    }
}
