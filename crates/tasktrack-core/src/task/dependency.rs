//! Task-to-task dependencies.
//!
//! An edge `a -> b` means task `a` depends on task `b`. The graph must stay
//! acyclic.

use std::collections::{HashMap, HashSet};

use super::Task;

/// Whether adding `task_id -> depends_on` would close a cycle.
///
/// `edges` maps a task id to the ids it depends on.
pub fn creates_cycle(edges: &HashMap<String, Vec<String>>, task_id: &str, depends_on: &str) -> bool {
    if task_id == depends_on {
        return true;
    }
    // Cycle iff task_id is reachable from depends_on.
    let mut stack = vec![depends_on];
    let mut seen = HashSet::new();
    while let Some(current) = stack.pop() {
        if current == task_id {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        if let Some(next) = edges.get(current) {
            stack.extend(next.iter().map(String::as_str));
        }
    }
    false
}

/// Build the edge map for [`creates_cycle`] from a task list.
pub fn edge_map<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> HashMap<String, Vec<String>> {
    tasks
        .into_iter()
        .filter(|t| !t.depends_on.is_empty())
        .map(|t| (t.id.clone(), t.depends_on.clone()))
        .collect()
}

/// Dependencies of `task` that are not yet done or cancelled.
///
/// Ids that `lookup` cannot resolve are skipped; a deleted dependency no
/// longer holds anything up.
pub fn unresolved<'a, F>(task: &Task, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<&'a Task>,
{
    task.depends_on
        .iter()
        .filter(|id| lookup(id).is_some_and(|dep| !dep.status.is_resolved()))
        .cloned()
        .collect()
}
