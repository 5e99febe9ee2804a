//! # tasktrack Core Library
//!
//! Business logic for the tasktrack work-item tracker. The CLI binary is a
//! thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Scoring**: a pure, never-failing penalty calculator over a read-only
//!   [`TaskSnapshot`]
//! - **Task lifecycle**: explicit state machine with guarded transitions,
//!   rework and extension workflows, dependencies and comments
//! - **Service**: [`TaskService`] drives every workflow over an injected
//!   [`TaskRepository`] and records [`Event`]s
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`calculate_task_score`]: the scoring engine
//! - [`Task`]: task record and state machine
//! - [`TaskService`]: workflow orchestration
//! - [`TaskReport`]: aggregates over a task list
//! - [`Config`]: application configuration management

pub mod clock;
pub mod command;
pub mod epic;
pub mod error;
pub mod events;
pub mod report;
pub mod repository;
pub mod scoring;
pub mod service;
pub mod storage;
pub mod task;

pub use clock::{Clock, ManualClock, SystemClock};
pub use command::{CommandContext, CommandParser, TaskDraft};
pub use epic::{Epic, EpicProgress};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use report::{OverdueTask, ScoreSummary, TaskReport};
pub use repository::{EpicRepository, InMemoryEpicRepository, InMemoryTaskRepository, TaskRepository};
pub use scoring::{
    calculate_task_score, explain_task_score, rework_penalty, PenaltyBreakdown, PenaltyDetail,
    TaskScore, TaskSnapshot,
};
pub use service::TaskService;
pub use storage::Config;
pub use task::{
    Comment, ExtensionRequest, ExtensionStatus, Priority, StateTransitionEntry, Task, TaskStatus,
    TaskTransitionError, TransitionAction,
};
