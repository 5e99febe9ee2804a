//! Summarize a task list.

use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;
use tasktrack_core::{Config, Task, TaskReport};

#[derive(Args)]
pub struct ReportArgs {
    /// JSON array of tasks; stdin when omitted or "-"
    file: Option<PathBuf>,
    /// Reference time (RFC 3339), defaults to now
    #[arg(long)]
    now: Option<DateTime<Utc>>,
    /// Override report.overdue_grace_minutes
    #[arg(long)]
    grace_minutes: Option<u32>,
}

pub fn run(args: ReportArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::read_input(args.file.as_deref())?;
    let tasks: Vec<Task> = serde_json::from_str(&input)?;

    let mut report_config = config.report.clone();
    if let Some(grace) = args.grace_minutes {
        report_config.overdue_grace_minutes = grace;
    }

    let now = args.now.unwrap_or_else(Utc::now);
    let report = TaskReport::build(&tasks, now, &report_config);
    tracing::debug!(tasks = tasks.len(), scored = report.scored_tasks, "report built");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
