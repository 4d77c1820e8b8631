use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a task (e.g., task-1, task-2, task-100)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    const PREFIX: &'static str = "task-";

    /// Creates a new TaskId from a counter
    pub fn new(counter: usize) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TaskId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Canonical form only, so "task-01" cannot alias "task-1"
        match s
            .strip_prefix(Self::PREFIX)
            .and_then(|number| number.parse::<usize>().ok())
        {
            Some(n) if n > 0 && Self::new(n).0 == s => Ok(Self::new(n)),
            _ => Err(crate::error::BoardError::InvalidTaskId(s.to_string())),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the board. Content is kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

impl Task {
    pub fn new(id: TaskId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_creation() {
        assert_eq!(TaskId::new(1).as_str(), "task-1");
        assert_eq!(TaskId::new(42).as_str(), "task-42");
        assert_eq!(TaskId::new(1000).to_string(), "task-1000");
    }

    #[test]
    fn test_task_id_parsing() {
        let id = TaskId::from_str("task-7").unwrap();
        assert_eq!(id, TaskId::new(7));

        assert!(TaskId::from_str("task-").is_err());
        assert!(TaskId::from_str("task-0").is_err());
        assert!(TaskId::from_str("task-abc").is_err());
        assert!(TaskId::from_str("column-1").is_err());
        assert!(TaskId::from_str("TASK-1").is_err());
        assert!(TaskId::from_str("task-01").is_err());
        assert!(TaskId::from_str("task-+1").is_err());
    }

    #[test]
    fn test_task_serializes_as_plain_strings() {
        let task = Task::new(TaskId::new(1), "Fix bug");
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": "task-1", "content": "Fix bug" })
        );
    }

    #[test]
    fn test_task_content_kept_verbatim() {
        let task = Task::new(TaskId::new(3), "  padded  ");
        assert_eq!(task.content, "  padded  ");
    }
}
