//! Core error types for tasktrack-core.
//!
//! Scoring itself never fails; these errors cover the lifecycle workflows,
//! the repository and configuration around it.

use std::path::PathBuf;
use thiserror::Error;

use crate::task::TaskTransitionError;

/// Core error type for tasktrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid lifecycle transition
    #[error(transparent)]
    Transition(#[from] TaskTransitionError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity missing from the repository
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Adding the edge would make the dependency graph cyclic
    #[error("Dependency {depends_on} would create a cycle for task {task_id}")]
    DependencyCycle { task_id: String, depends_on: String },

    /// Task still waits on dependencies that are not finished
    #[error("Task {task_id} has unresolved dependencies: {}", pending.join(", "))]
    DependenciesUnresolved { task_id: String, pending: Vec<String> },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn task_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind: "Task",
            id: id.into(),
        }
    }

    pub(crate) fn epic_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind: "Epic",
            id: id.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not determine or create the data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Required field missing or blank
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// Requested due date does not move the deadline forward
    #[error("Requested due date {requested} must be after the current due date {current}")]
    ExtensionNotLater {
        requested: chrono::DateTime<chrono::Utc>,
        current: chrono::DateTime<chrono::Utc>,
    },

    /// Too many open extension requests
    #[error("Task {task_id} already has {pending} pending extension request(s)")]
    TooManyPendingExtensions { task_id: String, pending: usize },

    /// Extension request already approved or rejected
    #[error("Extension request {0} has already been decided")]
    ExtensionAlreadyDecided(String),

    /// Task is in a terminal state
    #[error("Task {0} is closed")]
    TaskClosed(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_dependencies_lists_ids() {
        let err = CoreError::DependenciesUnresolved {
            task_id: "task-a".into(),
            pending: vec!["task-b".into(), "task-c".into()],
        };
        assert_eq!(
            err.to_string(),
            "Task task-a has unresolved dependencies: task-b, task-c"
        );
    }

    #[test]
    fn not_found_names_kind() {
        assert_eq!(
            CoreError::epic_not_found("epic-1").to_string(),
            "Epic not found: epic-1"
        );
    }
}
