//! Task service: the lifecycle workflows over an injected repository.
//!
//! Every mutation loads the task, applies the change through the task
//! model, writes it back and records an [`Event`]. Scoring happens in one
//! place only: when a task enters DONE.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::command::{CommandContext, CommandParser, TaskDraft};
use crate::epic::{Epic, EpicProgress};
use crate::error::{CoreError, Result, ValidationError};
use crate::events::Event;
use crate::report::TaskReport;
use crate::repository::{
    EpicRepository, InMemoryEpicRepository, InMemoryTaskRepository, TaskRepository,
};
use crate::scoring::calculate_task_score;
use crate::storage::Config;
use crate::task::dependency;
use crate::task::{Comment, ExtensionRequest, Task, TaskStatus, TransitionAction};

/// Orchestrates task workflows over a task and an epic repository.
pub struct TaskService<R = InMemoryTaskRepository, E = InMemoryEpicRepository> {
    tasks: R,
    epics: E,
    config: Config,
    clock: Box<dyn Clock>,
    events: Vec<Event>,
}

impl TaskService {
    /// Service over fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self::new(InMemoryTaskRepository::new(), InMemoryEpicRepository::new())
    }
}

impl<R: TaskRepository, E: EpicRepository> TaskService<R, E> {
    pub fn new(tasks: R, epics: E) -> Self {
        Self {
            tasks,
            epics,
            config: Config::default(),
            clock: Box::new(SystemClock),
            events: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn emit(&mut self, event: Event) {
        debug!(?event, "event");
        self.events.push(event);
    }

    fn load(&self, id: &str) -> Result<Task> {
        self.tasks
            .get(id)?
            .ok_or_else(|| CoreError::task_not_found(id))
    }

    // --- creation ---------------------------------------------------------

    /// Create a task with just a title.
    pub fn create_task(&mut self, title: &str) -> Result<Task> {
        self.create_from_draft(TaskDraft {
            title: Some(title.to_string()),
            ..TaskDraft::default()
        })
    }

    /// Create a task from partial fields.
    pub fn create_from_draft(&mut self, draft: TaskDraft) -> Result<Task> {
        if let Some(epic_id) = draft.epic_id.as_deref() {
            if self.epics.get_epic(epic_id)?.is_none() {
                return Err(CoreError::epic_not_found(epic_id));
            }
        }
        let now = self.now();
        let task = draft.into_task(self.config.tasks.default_priority, now)?;
        self.tasks.add(task.clone())?;
        info!(task_id = %task.id, title = %task.title, "task created");
        self.emit(Event::TaskCreated {
            task_id: task.id.clone(),
            title: task.title.clone(),
            at: now,
        });
        Ok(task)
    }

    /// Parse free text with `parser` and create the resulting task.
    pub fn create_from_command<P: CommandParser + ?Sized>(
        &mut self,
        parser: &P,
        text: &str,
    ) -> Result<Task> {
        let context = CommandContext {
            now: Some(self.now()),
            epics: self.epics.list_epics()?,
            assignees: Vec::new(),
        };
        let draft = parser.parse_command(text, &context)?;
        self.create_from_draft(draft)
    }

    pub fn get_task(&self, id: &str) -> Result<Task> {
        self.load(id)
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.tasks.list()
    }

    /// Remove a task and every dependency edge pointing at it.
    pub fn remove_task(&mut self, id: &str) -> Result<Task> {
        let removed = self
            .tasks
            .remove(id)?
            .ok_or_else(|| CoreError::task_not_found(id))?;
        let now = self.now();
        for mut task in self.tasks.list()? {
            if task.depends_on.iter().any(|d| d == id) {
                task.depends_on.retain(|d| d != id);
                task.updated_at = now;
                self.tasks.update(&task)?;
                self.emit(Event::DependencyRemoved {
                    task_id: task.id.clone(),
                    depends_on: id.to_string(),
                    at: now,
                });
            }
        }
        info!(task_id = %removed.id, "task removed");
        self.emit(Event::TaskRemoved {
            task_id: removed.id.clone(),
            at: now,
        });
        Ok(removed)
    }

    /// Commit a deadline on a task that has none yet.
    pub fn set_due_date(&mut self, id: &str, due: DateTime<Utc>) -> Result<Task> {
        let mut task = self.load(id)?;
        if task.is_terminal() {
            return Err(ValidationError::TaskClosed(task.id).into());
        }
        let now = self.now();
        task.set_initial_due_date(due, now)?;
        self.tasks.update(&task)?;
        self.emit(Event::DueDateSet {
            task_id: task.id.clone(),
            due_date: due,
            at: now,
        });
        Ok(task)
    }

    // --- lifecycle --------------------------------------------------------

    /// Apply a lifecycle action.
    ///
    /// Actions that move a task into active work or completion require all
    /// of its dependencies to be done or cancelled. Entering DONE scores the
    /// task and stores the result on it.
    pub fn apply(&mut self, id: &str, action: TransitionAction) -> Result<Task> {
        let mut task = self.load(id)?;

        if action.requires_resolved_dependencies() && action.is_allowed_from(task.status) {
            let pending = self.unresolved_for(&task)?;
            if !pending.is_empty() {
                warn!(task_id = %task.id, %action, ?pending, "blocked by dependencies");
                return Err(CoreError::DependenciesUnresolved {
                    task_id: task.id,
                    pending,
                });
            }
        }

        let now = self.now();
        let entry = task.apply_action(action, now).map_err(|e| {
            warn!(task_id = %id, error = %e, "transition rejected");
            e
        })?;

        let mut follow_up = Vec::new();
        match action {
            TransitionAction::RequestRework => follow_up.push(Event::ReworkRequested {
                task_id: task.id.clone(),
                rework_count: task.rework_count,
                at: now,
            }),
            TransitionAction::Complete => {
                let score = calculate_task_score(&task.snapshot());
                task.score = Some(score);
                info!(
                    task_id = %task.id,
                    final_score = score.final_score,
                    extension = score.breakdown.extension_penalty,
                    delay = score.breakdown.delay_penalty,
                    rework = score.breakdown.rework_penalty,
                    "task scored"
                );
                follow_up.push(Event::TaskCompleted {
                    task_id: task.id.clone(),
                    score,
                    at: now,
                });
            }
            TransitionAction::Cancel => follow_up.push(Event::TaskCancelled {
                task_id: task.id.clone(),
                at: now,
            }),
            _ => {}
        }

        self.tasks.update(&task)?;
        self.emit(Event::StatusChanged {
            task_id: task.id.clone(),
            from: entry.from,
            to: entry.to,
            action,
            at: now,
        });
        for event in follow_up {
            self.emit(event);
        }
        Ok(task)
    }

    /// Send a task under review back for rework, optionally noting why.
    pub fn request_rework(
        &mut self,
        id: &str,
        reviewer: &str,
        note: Option<&str>,
    ) -> Result<Task> {
        let task = self.apply(id, TransitionAction::RequestRework)?;
        match note.filter(|n| !n.trim().is_empty()) {
            Some(note) => {
                self.add_comment(id, reviewer, note)?;
                self.load(id)
            }
            None => Ok(task),
        }
    }

    // --- extensions -------------------------------------------------------

    pub fn request_extension(
        &mut self,
        id: &str,
        requested_due_date: DateTime<Utc>,
        reason: Option<String>,
        requested_by: Option<String>,
    ) -> Result<ExtensionRequest> {
        let mut task = self.load(id)?;
        let now = self.now();
        let max_pending = self.config.extensions.max_pending_per_task as usize;
        let request = task
            .request_extension(requested_due_date, reason, requested_by, max_pending, now)?
            .clone();
        self.tasks.update(&task)?;
        self.emit(Event::ExtensionRequested {
            task_id: task.id.clone(),
            request_id: request.id.clone(),
            requested_due_date,
            at: now,
        });
        Ok(request)
    }

    /// Approve a pending extension; the task's current due date moves, its
    /// original due date does not.
    pub fn approve_extension(
        &mut self,
        id: &str,
        request_id: &str,
        decided_by: Option<String>,
    ) -> Result<ExtensionRequest> {
        let mut task = self.load(id)?;
        let previous_due_date = task.due_date;
        let now = self.now();
        let request = task.approve_extension(request_id, decided_by, now)?;
        self.tasks.update(&task)?;
        info!(
            task_id = %task.id,
            request_id,
            due_date = %request.requested_due_date,
            "extension approved"
        );
        self.emit(Event::ExtensionApproved {
            task_id: task.id.clone(),
            request_id: request.id.clone(),
            previous_due_date,
            due_date: request.requested_due_date,
            at: now,
        });
        Ok(request)
    }

    pub fn reject_extension(
        &mut self,
        id: &str,
        request_id: &str,
        decided_by: Option<String>,
    ) -> Result<ExtensionRequest> {
        let mut task = self.load(id)?;
        let now = self.now();
        let request = task.reject_extension(request_id, decided_by, now)?;
        self.tasks.update(&task)?;
        info!(task_id = %task.id, request_id, "extension rejected");
        self.emit(Event::ExtensionRejected {
            task_id: task.id.clone(),
            request_id: request.id.clone(),
            at: now,
        });
        Ok(request)
    }

    // --- comments ---------------------------------------------------------

    pub fn add_comment(&mut self, id: &str, author: &str, body: &str) -> Result<Comment> {
        let mut task = self.load(id)?;
        let now = self.now();
        let comment = task.add_comment(author, body, now)?.clone();
        self.tasks.update(&task)?;
        self.emit(Event::CommentAdded {
            task_id: task.id.clone(),
            comment_id: comment.id.clone(),
            author: comment.author.clone(),
            at: now,
        });
        Ok(comment)
    }

    // --- dependencies -----------------------------------------------------

    /// Make `id` depend on `depends_on`.
    pub fn add_dependency(&mut self, id: &str, depends_on: &str) -> Result<Task> {
        let mut task = self.load(id)?;
        self.load(depends_on)?;
        if task.is_terminal() {
            return Err(ValidationError::TaskClosed(task.id).into());
        }
        if task.depends_on.iter().any(|d| d == depends_on) {
            return Err(ValidationError::InvalidValue {
                field: "depends_on".into(),
                message: format!("{id} already depends on {depends_on}"),
            }
            .into());
        }

        let all = self.tasks.list()?;
        let edges = dependency::edge_map(&all);
        if dependency::creates_cycle(&edges, id, depends_on) {
            warn!(task_id = %id, depends_on, "dependency cycle rejected");
            return Err(CoreError::DependencyCycle {
                task_id: id.to_string(),
                depends_on: depends_on.to_string(),
            });
        }

        let now = self.now();
        task.depends_on.push(depends_on.to_string());
        task.updated_at = now;
        self.tasks.update(&task)?;
        self.emit(Event::DependencyAdded {
            task_id: task.id.clone(),
            depends_on: depends_on.to_string(),
            at: now,
        });
        Ok(task)
    }

    /// Drop the edge `id -> depends_on` if present.
    pub fn remove_dependency(&mut self, id: &str, depends_on: &str) -> Result<Task> {
        let mut task = self.load(id)?;
        let before = task.depends_on.len();
        task.depends_on.retain(|d| d != depends_on);
        if task.depends_on.len() != before {
            let now = self.now();
            task.updated_at = now;
            self.tasks.update(&task)?;
            self.emit(Event::DependencyRemoved {
                task_id: task.id.clone(),
                depends_on: depends_on.to_string(),
                at: now,
            });
        }
        Ok(task)
    }

    /// Dependencies of `id` that are neither done nor cancelled.
    pub fn unresolved_dependencies(&self, id: &str) -> Result<Vec<String>> {
        let task = self.load(id)?;
        self.unresolved_for(&task)
    }

    fn unresolved_for(&self, task: &Task) -> Result<Vec<String>> {
        if task.depends_on.is_empty() {
            return Ok(Vec::new());
        }
        let all = self.tasks.list()?;
        Ok(dependency::unresolved(task, |dep_id| {
            all.iter().find(|t| t.id == dep_id)
        }))
    }

    // --- epics ------------------------------------------------------------

    pub fn create_epic(&mut self, title: &str, description: Option<String>) -> Result<Epic> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }
        let now = self.now();
        let mut epic = Epic::new(title, now);
        epic.description = description;
        self.epics.add_epic(epic.clone())?;
        self.emit(Event::EpicCreated {
            epic_id: epic.id.clone(),
            title: epic.title.clone(),
            at: now,
        });
        Ok(epic)
    }

    pub fn assign_to_epic(&mut self, id: &str, epic_id: &str) -> Result<Task> {
        if self.epics.get_epic(epic_id)?.is_none() {
            return Err(CoreError::epic_not_found(epic_id));
        }
        let mut task = self.load(id)?;
        let now = self.now();
        task.epic_id = Some(epic_id.to_string());
        task.updated_at = now;
        self.tasks.update(&task)?;
        self.emit(Event::TaskAssignedToEpic {
            task_id: task.id.clone(),
            epic_id: epic_id.to_string(),
            at: now,
        });
        Ok(task)
    }

    pub fn epic_progress(&self, epic_id: &str) -> Result<EpicProgress> {
        if self.epics.get_epic(epic_id)?.is_none() {
            return Err(CoreError::epic_not_found(epic_id));
        }
        Ok(EpicProgress::for_epic(epic_id, &self.tasks.list()?))
    }

    // --- reporting --------------------------------------------------------

    pub fn report(&self) -> Result<TaskReport> {
        Ok(TaskReport::build(
            &self.tasks.list()?,
            self.now(),
            &self.config.report,
        ))
    }

    /// Count of tasks per status.
    pub fn count_by_status(&self, status: TaskStatus) -> Result<usize> {
        Ok(self
            .tasks
            .list()?
            .iter()
            .filter(|t| t.status == status)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 6, 9, 0, 0).unwrap()
    }

    fn service() -> (TaskService, ManualClock) {
        let clock = ManualClock::new(t0());
        (TaskService::in_memory().with_clock(clock.clone()), clock)
    }

    #[test]
    fn complete_scores_once_and_stores_result() {
        let (mut svc, clock) = service();
        let task = svc.create_task("Draft proposal").unwrap();
        svc.set_due_date(&task.id, t0() + Duration::days(1)).unwrap();
        svc.apply(&task.id, TransitionAction::Start).unwrap();

        clock.advance(Duration::days(3));
        let done = svc.apply(&task.id, TransitionAction::Complete).unwrap();

        assert_eq!(done.status, TaskStatus::Done);
        let score = done.score.unwrap();
        assert_eq!(score, calculate_task_score(&done.snapshot()));
        assert_eq!(score.breakdown.delay_penalty, 20);
        let completed_events = svc
            .events()
            .iter()
            .filter(|e| matches!(e, Event::TaskCompleted { .. }))
            .count();
        assert_eq!(completed_events, 1);

        // Terminal: a second completion is rejected and nothing is re-scored.
        assert!(matches!(
            svc.apply(&task.id, TransitionAction::Complete),
            Err(CoreError::Transition(_))
        ));
        assert_eq!(svc.get_task(&task.id).unwrap().score, Some(score));
    }

    #[test]
    fn cancelled_tasks_are_not_scored() {
        let (mut svc, _) = service();
        let task = svc.create_task("Abandon me").unwrap();
        let cancelled = svc.apply(&task.id, TransitionAction::Cancel).unwrap();
        assert_eq!(cancelled.status, TaskStatus::Cancelled);
        assert!(cancelled.score.is_none());
        assert!(matches!(
            svc.events().last(),
            Some(Event::TaskCancelled { .. })
        ));
    }

    #[test]
    fn rework_with_note_adds_comment() {
        let (mut svc, _) = service();
        let task = svc.create_task("Review me").unwrap();
        svc.apply(&task.id, TransitionAction::Start).unwrap();
        svc.apply(&task.id, TransitionAction::SubmitForReview).unwrap();
        let reworked = svc
            .request_rework(&task.id, "reviewer", Some("missing tests"))
            .unwrap();
        assert_eq!(reworked.rework_count, 1);
        assert_eq!(reworked.status, TaskStatus::InProgress);
        assert_eq!(reworked.comments[0].body, "missing tests");
    }

    #[test]
    fn dependencies_guard_start() {
        let (mut svc, _) = service();
        let base = svc.create_task("Base").unwrap();
        let top = svc.create_task("Top").unwrap();
        svc.add_dependency(&top.id, &base.id).unwrap();

        let err = svc.apply(&top.id, TransitionAction::Start).unwrap_err();
        assert!(matches!(err, CoreError::DependenciesUnresolved { ref pending, .. } if pending == &vec![base.id.clone()]));
        assert_eq!(svc.get_task(&top.id).unwrap().status, TaskStatus::ToDo);

        svc.apply(&base.id, TransitionAction::Cancel).unwrap();
        assert!(svc.apply(&top.id, TransitionAction::Start).is_ok());
    }

    #[test]
    fn invalid_action_reports_transition_before_dependencies() {
        let (mut svc, _) = service();
        let base = svc.create_task("Base").unwrap();
        let top = svc.create_task("Top").unwrap();
        svc.add_dependency(&top.id, &base.id).unwrap();
        // TO_DO cannot complete at all.
        assert!(matches!(
            svc.apply(&top.id, TransitionAction::Complete),
            Err(CoreError::Transition(_))
        ));
    }

    #[test]
    fn dependency_cycles_are_rejected() {
        let (mut svc, _) = service();
        let a = svc.create_task("A").unwrap();
        let b = svc.create_task("B").unwrap();
        let c = svc.create_task("C").unwrap();
        svc.add_dependency(&a.id, &b.id).unwrap();
        svc.add_dependency(&b.id, &c.id).unwrap();
        assert!(matches!(
            svc.add_dependency(&c.id, &a.id),
            Err(CoreError::DependencyCycle { .. })
        ));
        assert!(svc.add_dependency(&a.id, &a.id).is_err());
        assert!(svc.add_dependency(&a.id, &b.id).is_err());
    }

    #[test]
    fn removing_a_task_drops_edges() {
        let (mut svc, _) = service();
        let a = svc.create_task("A").unwrap();
        let b = svc.create_task("B").unwrap();
        svc.add_dependency(&a.id, &b.id).unwrap();
        svc.remove_task(&b.id).unwrap();
        assert!(svc.get_task(&a.id).unwrap().depends_on.is_empty());
        assert!(svc.apply(&a.id, TransitionAction::Start).is_ok());
    }

    #[test]
    fn extension_respects_configured_limit() {
        let mut config = Config::default();
        config.extensions.max_pending_per_task = 2;
        let clock = ManualClock::new(t0());
        let mut svc = TaskService::in_memory()
            .with_config(config)
            .with_clock(clock);
        let task = svc.create_task("Long one").unwrap();
        svc.set_due_date(&task.id, t0() + Duration::days(1)).unwrap();
        svc.request_extension(&task.id, t0() + Duration::days(2), None, None)
            .unwrap();
        svc.request_extension(&task.id, t0() + Duration::days(3), None, None)
            .unwrap();
        assert!(svc
            .request_extension(&task.id, t0() + Duration::days(4), None, None)
            .is_err());
    }

    #[test]
    fn approved_extension_emits_previous_due_date() {
        let (mut svc, _) = service();
        let task = svc.create_task("Report").unwrap();
        let due = t0() + Duration::days(1);
        svc.set_due_date(&task.id, due).unwrap();
        let request = svc
            .request_extension(&task.id, due + Duration::days(1), Some("sick day".into()), None)
            .unwrap();
        svc.approve_extension(&task.id, &request.id, Some("lead".into()))
            .unwrap();

        let task = svc.get_task(&task.id).unwrap();
        assert_eq!(task.original_due_date, Some(due));
        assert_eq!(task.due_date, Some(due + Duration::days(1)));
        assert!(matches!(
            svc.events().last(),
            Some(Event::ExtensionApproved { previous_due_date: Some(prev), .. }) if *prev == due
        ));
    }

    #[test]
    fn due_date_commits_once() {
        let (mut svc, _) = service();
        let task = svc.create_task("Report").unwrap();
        svc.set_due_date(&task.id, t0() + Duration::days(1)).unwrap();
        assert!(svc.set_due_date(&task.id, t0() + Duration::days(5)).is_err());
    }

    #[test]
    fn create_from_draft_checks_epic() {
        let (mut svc, _) = service();
        let draft = TaskDraft {
            title: Some("Orphan".into()),
            epic_id: Some("epic-missing".into()),
            ..TaskDraft::default()
        };
        assert!(matches!(
            svc.create_from_draft(draft),
            Err(CoreError::NotFound { kind: "Epic", .. })
        ));
    }

    #[test]
    fn create_from_command_uses_parser_and_context() {
        let (mut svc, _) = service();
        let epic = svc.create_epic("Q3 close", None).unwrap();
        let parser = |text: &str, ctx: &CommandContext| -> Result<TaskDraft> {
            Ok(TaskDraft {
                title: Some(text.to_string()),
                due_date: ctx.now.map(|now| now + Duration::days(1)),
                epic_id: ctx.epics.first().map(|e| e.id.clone()),
                ..TaskDraft::default()
            })
        };
        let task = svc.create_from_command(&parser, "reconcile ledger").unwrap();
        assert_eq!(task.title, "reconcile ledger");
        assert_eq!(task.due_date, Some(t0() + Duration::days(1)));
        assert_eq!(task.epic_id.as_deref(), Some(epic.id.as_str()));
    }

    #[test]
    fn epic_progress_tracks_done_tasks() {
        let (mut svc, _) = service();
        let epic = svc.create_epic("Launch", None).unwrap();
        let a = svc.create_task("A").unwrap();
        let b = svc.create_task("B").unwrap();
        svc.assign_to_epic(&a.id, &epic.id).unwrap();
        svc.assign_to_epic(&b.id, &epic.id).unwrap();
        svc.apply(&a.id, TransitionAction::Start).unwrap();
        svc.apply(&a.id, TransitionAction::Complete).unwrap();

        let progress = svc.epic_progress(&epic.id).unwrap();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.done, 1);
        assert_eq!(progress.percent_done, 0.5);
    }

    #[test]
    fn take_events_drains_log() {
        let (mut svc, _) = service();
        svc.create_task("A").unwrap();
        assert_eq!(svc.take_events().len(), 1);
        assert!(svc.events().is_empty());
        assert_eq!(svc.count_by_status(TaskStatus::ToDo).unwrap(), 1);
    }

    #[test]
    fn assign_to_epic_emits_event() {
        let (mut svc, _) = service();
        let epic = svc.create_epic("Launch", None).unwrap();
        let task = svc.create_task("A").unwrap();
        svc.take_events();

        svc.assign_to_epic(&task.id, &epic.id).unwrap();

        assert_eq!(
            svc.events(),
            &[Event::TaskAssignedToEpic {
                task_id: task.id.clone(),
                epic_id: epic.id.clone(),
                at: t0(),
            }]
        );
    }

    #[test]
    fn remove_task_strips_edges_and_emits_events() {
        let (mut svc, clock) = service();
        let base = svc.create_task("Base").unwrap();
        let top = svc.create_task("Top").unwrap();
        svc.add_dependency(&top.id, &base.id).unwrap();
        svc.take_events();

        clock.advance(Duration::hours(1));
        let at = t0() + Duration::hours(1);
        svc.remove_task(&base.id).unwrap();

        assert!(svc.get_task(&top.id).unwrap().depends_on.is_empty());
        assert!(svc.get_task(&base.id).is_err());
        assert_eq!(
            svc.take_events(),
            vec![
                Event::DependencyRemoved {
                    task_id: top.id.clone(),
                    depends_on: base.id.clone(),
                    at,
                },
                Event::TaskRemoved {
                    task_id: base.id.clone(),
                    at,
                },
            ]
        );
    }
}
