//! Replay a lifecycle script against an in-memory task service.
//!
//! A script is a JSON object:
//!
//! ```json
//! {
//!   "tasks": [],
//!   "steps": [
//!     { "at": "2026-07-01T09:00:00Z", "op": "create", "ref": "a", "title": "Audit", "due_date": "2026-07-05T17:00:00Z" },
//!     { "op": "transition", "task": "a", "action": "start" },
//!     { "at": "2026-07-06T09:00:00Z", "op": "transition", "task": "a", "action": "complete" }
//!   ]
//! }
//! ```
//!
//! `ref` names let later steps refer to tasks, epics and extension requests
//! created earlier in the script. A name that was never bound is used as a
//! literal id.

use chrono::{DateTime, Utc};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tasktrack_core::{
    Config, CoreError, Event, InMemoryEpicRepository, InMemoryTaskRepository, ManualClock,
    Priority, Task, TaskDraft, TaskService, TransitionAction,
};

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file; stdin when omitted or "-"
    file: Option<PathBuf>,
    /// Record failing steps and continue instead of stopping
    #[arg(long)]
    keep_going: bool,
}

#[derive(Debug, Deserialize)]
struct Script {
    /// Tasks to seed the repository with.
    #[serde(default)]
    tasks: Vec<Task>,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    /// Clock time for this step; the previous time carries over when absent.
    #[serde(default)]
    at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    op: Op,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Op {
    Create {
        #[serde(rename = "ref", default)]
        name: Option<String>,
        title: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        priority: Option<Priority>,
        #[serde(default)]
        assignee: Option<String>,
        #[serde(default)]
        due_date: Option<DateTime<Utc>>,
        #[serde(default)]
        tags: Vec<String>,
        #[serde(default)]
        epic: Option<String>,
    },
    Epic {
        #[serde(rename = "ref", default)]
        name: Option<String>,
        title: String,
        #[serde(default)]
        description: Option<String>,
    },
    SetDueDate {
        task: String,
        due_date: DateTime<Utc>,
    },
    Transition {
        task: String,
        action: TransitionAction,
    },
    Rework {
        task: String,
        reviewer: String,
        #[serde(default)]
        note: Option<String>,
    },
    RequestExtension {
        task: String,
        #[serde(rename = "ref", default)]
        name: Option<String>,
        due_date: DateTime<Utc>,
        #[serde(default)]
        reason: Option<String>,
        #[serde(default)]
        by: Option<String>,
    },
    ApproveExtension {
        task: String,
        request: String,
        #[serde(default)]
        by: Option<String>,
    },
    RejectExtension {
        task: String,
        request: String,
        #[serde(default)]
        by: Option<String>,
    },
    Comment {
        task: String,
        author: String,
        body: String,
    },
    Depend {
        task: String,
        on: String,
    },
    Undepend {
        task: String,
        on: String,
    },
}

#[derive(Debug, Serialize)]
struct StepFailure {
    step: usize,
    error: String,
}

#[derive(Debug, Serialize)]
struct ReplayOutput {
    tasks: Vec<Task>,
    events: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<StepFailure>,
}

/// Symbolic names bound during the replay.
#[derive(Default)]
struct Refs {
    ids: HashMap<String, String>,
}

impl Refs {
    fn bind(&mut self, name: Option<String>, id: &str) {
        if let Some(name) = name {
            self.ids.insert(name, id.to_string());
        }
    }

    fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.ids.get(name).map_or(name, String::as_str)
    }
}

type Service = TaskService<InMemoryTaskRepository, InMemoryEpicRepository>;

pub fn run(args: ReplayArgs, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::read_input(args.file.as_deref())?;
    let script: Script = serde_json::from_str(&input)?;

    let start = script
        .steps
        .iter()
        .find_map(|s| s.at)
        .unwrap_or_else(Utc::now);
    let clock = ManualClock::new(start);
    let mut service = TaskService::new(
        InMemoryTaskRepository::from_tasks(script.tasks),
        InMemoryEpicRepository::new(),
    )
    .with_config(config)
    .with_clock(clock.clone());

    let mut refs = Refs::default();
    let mut errors = Vec::new();

    for (index, step) in script.steps.into_iter().enumerate() {
        if let Some(at) = step.at {
            clock.set(at);
        }
        if let Err(e) = apply_step(&mut service, &mut refs, step.op) {
            tracing::warn!(step = index, error = %e, "replay step failed");
            if !args.keep_going {
                return Err(format!("step {index}: {e}").into());
            }
            errors.push(StepFailure {
                step: index,
                error: e.to_string(),
            });
        }
    }

    let output = ReplayOutput {
        tasks: service.list_tasks()?,
        events: service.take_events(),
        errors,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn apply_step(service: &mut Service, refs: &mut Refs, op: Op) -> Result<(), CoreError> {
    match op {
        Op::Create {
            name,
            title,
            description,
            priority,
            assignee,
            due_date,
            tags,
            epic,
        } => {
            let draft = TaskDraft {
                title: Some(title),
                description,
                priority,
                assignee,
                due_date,
                tags,
                epic_id: epic.map(|e| refs.resolve(&e).to_string()),
            };
            let task = service.create_from_draft(draft)?;
            refs.bind(name, &task.id);
        }
        Op::Epic {
            name,
            title,
            description,
        } => {
            let epic = service.create_epic(&title, description)?;
            refs.bind(name, &epic.id);
        }
        Op::SetDueDate { task, due_date } => {
            service.set_due_date(refs.resolve(&task), due_date)?;
        }
        Op::Transition { task, action } => {
            service.apply(refs.resolve(&task), action)?;
        }
        Op::Rework {
            task,
            reviewer,
            note,
        } => {
            service.request_rework(refs.resolve(&task), &reviewer, note.as_deref())?;
        }
        Op::RequestExtension {
            task,
            name,
            due_date,
            reason,
            by,
        } => {
            let request = service.request_extension(refs.resolve(&task), due_date, reason, by)?;
            refs.bind(name, &request.id);
        }
        Op::ApproveExtension { task, request, by } => {
            service.approve_extension(refs.resolve(&task), refs.resolve(&request), by)?;
        }
        Op::RejectExtension { task, request, by } => {
            service.reject_extension(refs.resolve(&task), refs.resolve(&request), by)?;
        }
        Op::Comment { task, author, body } => {
            service.add_comment(refs.resolve(&task), &author, &body)?;
        }
        Op::Depend { task, on } => {
            service.add_dependency(refs.resolve(&task), refs.resolve(&on))?;
        }
        Op::Undepend { task, on } => {
            service.remove_dependency(refs.resolve(&task), refs.resolve(&on))?;
        }
    }
    Ok(())
}
