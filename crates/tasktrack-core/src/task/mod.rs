//! Task model and lifecycle state machine.
//!
//! Status transitions are driven by [`TransitionAction`]s:
//!
//! ```text
//!            Start              SubmitForReview            Complete
//!   TO_DO ─────────> IN_PROGRESS ──────────────> UNDER_REVIEW ─────────> DONE
//!     |   Hold/Block   ^   |  ^      RequestRework    |
//!     |                |   |  +───────────────────────+
//!     v    Resume      |   |        Complete
//!   ON_HOLD ───────────+   +──────────────────────────────────────────> DONE
//!     ^      Unblock   |
//!   BLOCKED ───────────+
//!
//!   Cancel: any non-terminal state ─> CANCELLED
//! ```
//!
//! `DONE` and `CANCELLED` are terminal.

pub mod comment;
pub mod dependency;
pub mod extension;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::scoring::{TaskScore, TaskSnapshot};

pub use comment::Comment;
pub use extension::{ExtensionRequest, ExtensionStatus};

/// Task status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created, not started (initial state)
    #[default]
    ToDo,
    /// Being worked on
    InProgress,
    /// Parked by choice
    OnHold,
    /// Submitted and waiting for review
    UnderReview,
    /// Completed (terminal, scored)
    Done,
    /// Abandoned (terminal, never scored)
    Cancelled,
    /// Waiting on something outside the task
    Blocked,
}

impl TaskStatus {
    /// All statuses in board order.
    pub const ALL: [TaskStatus; 7] = [
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::OnHold,
        TaskStatus::UnderReview,
        TaskStatus::Blocked,
        TaskStatus::Done,
        TaskStatus::Cancelled,
    ];

    /// Terminal statuses accept no further actions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Cancelled)
    }

    /// A dependency in this status no longer holds up its dependents.
    pub fn is_resolved(&self) -> bool {
        self.is_terminal()
    }

    /// Check if a transition is valid.
    pub fn can_transition_to(&self, to: &TaskStatus) -> bool {
        TransitionAction::ALL
            .iter()
            .any(|action| action.is_allowed_from(*self) && action.target() == *to)
    }

    /// Actions that can be applied from this status.
    pub fn available_actions(&self) -> Vec<TransitionAction> {
        TransitionAction::ALL
            .iter()
            .copied()
            .filter(|action| action.is_allowed_from(*self))
            .collect()
    }

    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to_do",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::OnHold => "on_hold",
            TaskStatus::UnderReview => "under_review",
            TaskStatus::Done => "done",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    /// Accepts `in_progress`, `in-progress`, `In Progress`, `InProgress`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "todo" => Ok(TaskStatus::ToDo),
            "inprogress" => Ok(TaskStatus::InProgress),
            "onhold" => Ok(TaskStatus::OnHold),
            "underreview" => Ok(TaskStatus::UnderReview),
            "done" => Ok(TaskStatus::Done),
            "cancelled" | "canceled" => Ok(TaskStatus::Cancelled),
            "blocked" => Ok(TaskStatus::Blocked),
            _ => Err(ValidationError::InvalidValue {
                field: "status".into(),
                message: format!("unknown status '{s}'"),
            }),
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            other => Err(ValidationError::InvalidValue {
                field: "priority".into(),
                message: format!("unknown priority '{other}'"),
            }),
        }
    }
}

/// Action that can be applied to transition task status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransitionAction {
    /// TO_DO → IN_PROGRESS
    Start,
    /// TO_DO | IN_PROGRESS | BLOCKED → ON_HOLD
    Hold,
    /// ON_HOLD → IN_PROGRESS
    Resume,
    /// TO_DO | IN_PROGRESS | ON_HOLD → BLOCKED
    Block,
    /// BLOCKED → IN_PROGRESS
    Unblock,
    /// IN_PROGRESS → UNDER_REVIEW
    SubmitForReview,
    /// IN_PROGRESS | UNDER_REVIEW → DONE
    Complete,
    /// UNDER_REVIEW → IN_PROGRESS (rework_count += 1)
    RequestRework,
    /// any non-terminal → CANCELLED
    Cancel,
}

impl TransitionAction {
    pub const ALL: [TransitionAction; 9] = [
        TransitionAction::Start,
        TransitionAction::Hold,
        TransitionAction::Resume,
        TransitionAction::Block,
        TransitionAction::Unblock,
        TransitionAction::SubmitForReview,
        TransitionAction::Complete,
        TransitionAction::RequestRework,
        TransitionAction::Cancel,
    ];

    /// Status the task lands in after this action.
    pub fn target(&self) -> TaskStatus {
        match self {
            TransitionAction::Start
            | TransitionAction::Resume
            | TransitionAction::Unblock
            | TransitionAction::RequestRework => TaskStatus::InProgress,
            TransitionAction::Hold => TaskStatus::OnHold,
            TransitionAction::Block => TaskStatus::Blocked,
            TransitionAction::SubmitForReview => TaskStatus::UnderReview,
            TransitionAction::Complete => TaskStatus::Done,
            TransitionAction::Cancel => TaskStatus::Cancelled,
        }
    }

    /// Whether the action may be applied from `from`.
    pub fn is_allowed_from(&self, from: TaskStatus) -> bool {
        use TaskStatus::*;
        match self {
            TransitionAction::Start => from == ToDo,
            TransitionAction::Hold => matches!(from, ToDo | InProgress | Blocked),
            TransitionAction::Resume => from == OnHold,
            TransitionAction::Block => matches!(from, ToDo | InProgress | OnHold),
            TransitionAction::Unblock => from == Blocked,
            TransitionAction::SubmitForReview => from == InProgress,
            TransitionAction::Complete => matches!(from, InProgress | UnderReview),
            TransitionAction::RequestRework => from == UnderReview,
            TransitionAction::Cancel => !from.is_terminal(),
        }
    }

    /// Whether the action moves the task into active work and so must wait
    /// for its dependencies.
    pub fn requires_resolved_dependencies(&self) -> bool {
        matches!(
            self,
            TransitionAction::Start
                | TransitionAction::Resume
                | TransitionAction::Unblock
                | TransitionAction::Complete
        )
    }
}

impl fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitionAction::Start => "start",
            TransitionAction::Hold => "hold",
            TransitionAction::Resume => "resume",
            TransitionAction::Block => "block",
            TransitionAction::Unblock => "unblock",
            TransitionAction::SubmitForReview => "submit_for_review",
            TransitionAction::Complete => "complete",
            TransitionAction::RequestRework => "request_rework",
            TransitionAction::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

/// Error returned when an invalid state transition is attempted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("Invalid state transition: {from} → {to} ({action})")]
pub struct TaskTransitionError {
    pub from: TaskStatus,
    pub to: TaskStatus,
    pub action: TransitionAction,
}

/// Entry in state transition history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTransitionEntry {
    /// Status before transition
    pub from: TaskStatus,
    /// Status after transition
    pub to: TaskStatus,
    /// When the transition occurred
    pub at: DateTime<Utc>,
    /// Action that caused the transition
    pub operation: String,
}

/// Work item tracked through the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Owning epic, if any
    #[serde(default)]
    pub epic_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// First entry into IN_PROGRESS
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// First committed deadline; never moved by extensions
    #[serde(default)]
    pub original_due_date: Option<DateTime<Utc>>,
    /// Deadline currently in force
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Set once, on entry into DONE
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Number of times the task was sent back from review
    #[serde(default)]
    pub rework_count: u32,
    /// Ids of tasks this one waits on
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub extension_requests: Vec<ExtensionRequest>,
    #[serde(default)]
    pub history: Vec<StateTransitionEntry>,
    /// Score recorded when the task entered DONE
    #[serde(default)]
    pub score: Option<TaskScore>,
}

impl Task {
    /// Create a new task in TO_DO.
    pub fn new(title: impl Into<String>) -> Self {
        Self::new_at(title, Utc::now())
    }

    /// Create a new task with an explicit creation time.
    pub fn new_at(title: impl Into<String>, at: DateTime<Utc>) -> Self {
        Task {
            id: format!("task-{}", uuid::Uuid::new_v4()),
            title: title.into(),
            description: None,
            status: TaskStatus::ToDo,
            priority: Priority::default(),
            assignee: None,
            tags: Vec::new(),
            epic_id: None,
            created_at: at,
            updated_at: at,
            started_at: None,
            original_due_date: None,
            due_date: None,
            completed_at: None,
            rework_count: 0,
            depends_on: Vec::new(),
            comments: Vec::new(),
            extension_requests: Vec::new(),
            history: Vec::new(),
            score: None,
        }
    }

    /// Commit the initial deadline at creation.
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.original_due_date = Some(due);
        self.due_date = Some(due);
        self
    }

    /// Commit a deadline on a task that has none yet.
    ///
    /// Once committed, the deadline only moves through an approved extension.
    pub fn set_initial_due_date(
        &mut self,
        due: DateTime<Utc>,
        at: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        if self.original_due_date.is_some() {
            return Err(ValidationError::InvalidValue {
                field: "due_date".into(),
                message: "deadline already committed; request an extension instead".into(),
            });
        }
        self.original_due_date = Some(due);
        self.due_date = Some(due);
        self.updated_at = at;
        Ok(())
    }

    /// Read-only view for the scoring engine.
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            original_due_date: self.original_due_date,
            due_date: self.due_date,
            completed_at: self.completed_at,
            rework_count: Some(self.rework_count),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Past the deadline in force and still open.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_terminal() && self.due_date.is_some_and(|due| due < now)
    }

    /// Actions that can be applied from the current status.
    pub fn available_actions(&self) -> Vec<TransitionAction> {
        self.status.available_actions()
    }

    /// Apply a transition action.
    ///
    /// Returns an error and leaves the task untouched if the action is not
    /// allowed from the current status.
    pub fn apply_action(
        &mut self,
        action: TransitionAction,
        at: DateTime<Utc>,
    ) -> Result<StateTransitionEntry, TaskTransitionError> {
        let from = self.status;
        let to = action.target();
        if !action.is_allowed_from(from) {
            return Err(TaskTransitionError { from, to, action });
        }

        match action {
            TransitionAction::RequestRework => {
                self.rework_count = self.rework_count.saturating_add(1);
            }
            TransitionAction::Complete => {
                self.completed_at = Some(at);
            }
            _ => {}
        }
        if to == TaskStatus::InProgress && self.started_at.is_none() {
            self.started_at = Some(at);
        }

        self.status = to;
        self.updated_at = at;

        let entry = StateTransitionEntry {
            from,
            to,
            at,
            operation: action.to_string(),
        };
        self.history.push(entry.clone());
        Ok(entry)
    }

    /// Number of state transitions that have occurred.
    pub fn transition_count(&self) -> usize {
        self.history.len()
    }
}
