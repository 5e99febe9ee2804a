use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::TaskScore;
use crate::task::{TaskStatus, TransitionAction};

/// Every state change in the system produces an Event.
/// Callers collect them; the scoring engine reacts to `TaskCompleted` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskCreated {
        task_id: String,
        title: String,
        at: DateTime<Utc>,
    },
    StatusChanged {
        task_id: String,
        from: TaskStatus,
        to: TaskStatus,
        action: TransitionAction,
        at: DateTime<Utc>,
    },
    /// Task sent back from review; `rework_count` is the new total.
    ReworkRequested {
        task_id: String,
        rework_count: u32,
        at: DateTime<Utc>,
    },
    /// Task entered DONE and was scored.
    TaskCompleted {
        task_id: String,
        score: TaskScore,
        at: DateTime<Utc>,
    },
    TaskCancelled {
        task_id: String,
        at: DateTime<Utc>,
    },
    /// Task deleted; edges pointing at it are reported as `DependencyRemoved`.
    TaskRemoved {
        task_id: String,
        at: DateTime<Utc>,
    },
    DueDateSet {
        task_id: String,
        due_date: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    ExtensionRequested {
        task_id: String,
        request_id: String,
        requested_due_date: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    ExtensionApproved {
        task_id: String,
        request_id: String,
        previous_due_date: Option<DateTime<Utc>>,
        due_date: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    ExtensionRejected {
        task_id: String,
        request_id: String,
        at: DateTime<Utc>,
    },
    CommentAdded {
        task_id: String,
        comment_id: String,
        author: String,
        at: DateTime<Utc>,
    },
    DependencyAdded {
        task_id: String,
        depends_on: String,
        at: DateTime<Utc>,
    },
    DependencyRemoved {
        task_id: String,
        depends_on: String,
        at: DateTime<Utc>,
    },
    EpicCreated {
        epic_id: String,
        title: String,
        at: DateTime<Utc>,
    },
    TaskAssignedToEpic {
        task_id: String,
        epic_id: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Task the event refers to, if any.
    pub fn task_id(&self) -> Option<&str> {
        match self {
            Event::TaskCreated { task_id, .. }
            | Event::StatusChanged { task_id, .. }
            | Event::ReworkRequested { task_id, .. }
            | Event::TaskCompleted { task_id, .. }
            | Event::TaskCancelled { task_id, .. }
            | Event::TaskRemoved { task_id, .. }
            | Event::DueDateSet { task_id, .. }
            | Event::ExtensionRequested { task_id, .. }
            | Event::ExtensionApproved { task_id, .. }
            | Event::ExtensionRejected { task_id, .. }
            | Event::CommentAdded { task_id, .. }
            | Event::DependencyAdded { task_id, .. }
            | Event::DependencyRemoved { task_id, .. }
            | Event::TaskAssignedToEpic { task_id, .. } => Some(task_id),
            Event::EpicCreated { .. } => None,
        }
    }
}
