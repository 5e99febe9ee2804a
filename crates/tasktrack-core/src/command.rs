//! Natural-language command parsing boundary.
//!
//! Turning free text ("remind Sam to file the audit by Friday") into task
//! fields is delegated to an external parser. The core only defines the
//! interface and validates whatever the parser returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::epic::Epic;
use crate::error::{Result, ValidationError};
use crate::task::{Priority, Task};

/// What the parser may know about the surrounding system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandContext {
    /// Reference time for relative dates ("tomorrow").
    pub now: Option<DateTime<Utc>>,
    #[serde(default)]
    pub epics: Vec<Epic>,
    #[serde(default)]
    pub assignees: Vec<String>,
}

/// Partial task fields produced by a parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub epic_id: Option<String>,
}

impl TaskDraft {
    /// Build a task from the draft. A non-blank title is required.
    pub fn into_task(self, default_priority: Priority, at: DateTime<Utc>) -> Result<Task, ValidationError> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::MissingField("title"))?;

        let mut task = Task::new_at(title, at);
        task.description = self.description;
        task.priority = self.priority.unwrap_or(default_priority);
        task.assignee = self.assignee;
        task.tags = self.tags;
        task.epic_id = self.epic_id;
        if let Some(due) = self.due_date {
            task = task.with_due_date(due);
        }
        Ok(task)
    }
}

/// Parses free text into a [`TaskDraft`].
pub trait CommandParser {
    fn parse_command(&self, text: &str, context: &CommandContext) -> Result<TaskDraft>;
}

impl<F> CommandParser for F
where
    F: Fn(&str, &CommandContext) -> Result<TaskDraft>,
{
    fn parse_command(&self, text: &str, context: &CommandContext) -> Result<TaskDraft> {
        self(text, context)
    }
}
