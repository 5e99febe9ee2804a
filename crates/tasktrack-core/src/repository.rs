//! Repository interfaces over owned collections.
//!
//! Services receive a repository instead of reaching for shared state. The
//! in-memory implementations keep insertion order so listings are stable.

use indexmap::IndexMap;
use tracing::debug;

use crate::epic::Epic;
use crate::error::{CoreError, Result, ValidationError};
use crate::task::Task;

/// Storage for tasks.
pub trait TaskRepository {
    fn get(&self, id: &str) -> Result<Option<Task>>;
    /// Insert a new task. Fails if the id is taken.
    fn add(&mut self, task: Task) -> Result<()>;
    /// Replace an existing task. Fails if the id is unknown.
    fn update(&mut self, task: &Task) -> Result<()>;
    fn remove(&mut self, id: &str) -> Result<Option<Task>>;
    fn list(&self) -> Result<Vec<Task>>;
}

/// Storage for epics.
pub trait EpicRepository {
    fn get_epic(&self, id: &str) -> Result<Option<Epic>>;
    fn add_epic(&mut self, epic: Epic) -> Result<()>;
    fn list_epics(&self) -> Result<Vec<Epic>>;
}

/// Task repository backed by an in-process map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: IndexMap<String, Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a repository with existing tasks (later duplicates win).
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn get(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.tasks.get(id).cloned())
    }

    fn add(&mut self, task: Task) -> Result<()> {
        if self.tasks.contains_key(&task.id) {
            return Err(ValidationError::InvalidValue {
                field: "id".into(),
                message: format!("task {} already exists", task.id),
            }
            .into());
        }
        debug!(task_id = %task.id, "task added");
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    fn update(&mut self, task: &Task) -> Result<()> {
        let slot = self
            .tasks
            .get_mut(&task.id)
            .ok_or_else(|| CoreError::task_not_found(&task.id))?;
        *slot = task.clone();
        debug!(task_id = %task.id, status = %task.status, "task updated");
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<Option<Task>> {
        Ok(self.tasks.shift_remove(id))
    }

    fn list(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.values().cloned().collect())
    }
}

/// Epic repository backed by an in-process map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEpicRepository {
    epics: IndexMap<String, Epic>,
}

impl InMemoryEpicRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EpicRepository for InMemoryEpicRepository {
    fn get_epic(&self, id: &str) -> Result<Option<Epic>> {
        Ok(self.epics.get(id).cloned())
    }

    fn add_epic(&mut self, epic: Epic) -> Result<()> {
        if self.epics.contains_key(&epic.id) {
            return Err(ValidationError::InvalidValue {
                field: "id".into(),
                message: format!("epic {} already exists", epic.id),
            }
            .into());
        }
        self.epics.insert(epic.id.clone(), epic);
        Ok(())
    }

    fn list_epics(&self) -> Result<Vec<Epic>> {
        Ok(self.epics.values().cloned().collect())
    }
}
