//! Epics group related tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// A named group of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Epic {
    pub fn new(title: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: format!("epic-{}", uuid::Uuid::new_v4()),
            title: title.into(),
            description: None,
            created_at: at,
        }
    }
}

/// Completion roll-up for an epic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EpicProgress {
    pub total: usize,
    pub done: usize,
    pub cancelled: usize,
    /// Done share of the non-cancelled tasks (0.0 to 1.0).
    pub percent_done: f64,
}

impl EpicProgress {
    /// Roll up the tasks that belong to `epic_id`.
    pub fn for_epic<'a>(epic_id: &str, tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut progress = Self::default();
        for task in tasks
            .into_iter()
            .filter(|t| t.epic_id.as_deref() == Some(epic_id))
        {
            progress.total += 1;
            match task.status {
                TaskStatus::Done => progress.done += 1,
                TaskStatus::Cancelled => progress.cancelled += 1,
                _ => {}
            }
        }
        let active = progress.total - progress.cancelled;
        progress.percent_done = if active == 0 {
            0.0
        } else {
            progress.done as f64 / active as f64
        };
        progress
    }
}
