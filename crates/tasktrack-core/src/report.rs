//! Reporting over task lists.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::{PenaltyBreakdown, TaskScore};
use crate::storage::ReportConfig;
use crate::task::{ExtensionStatus, Task, TaskStatus};

/// Score line for one completed task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub task_id: String,
    pub title: String,
    pub score: TaskScore,
}

/// Open task past its deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueTask {
    pub task_id: String,
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub minutes_overdue: i64,
}

/// Aggregate view of a task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskReport {
    pub generated_at: DateTime<Utc>,
    pub total_tasks: usize,
    /// Task count per status (snake_case status names).
    pub by_status: BTreeMap<String, usize>,
    pub scored_tasks: usize,
    /// Mean final score of scored tasks; 0 when none are scored.
    pub average_score: f64,
    /// Sum of each penalty category across scored tasks.
    pub penalty_totals: PenaltyBreakdown,
    pub total_rework_cycles: u32,
    pub approved_extensions: usize,
    pub overdue: Vec<OverdueTask>,
    /// Scored tasks, worst score first.
    pub scores: Vec<ScoreSummary>,
}

impl TaskReport {
    /// Build a report from a task list as of `now`.
    pub fn build(tasks: &[Task], now: DateTime<Utc>, config: &ReportConfig) -> Self {
        let mut by_status: BTreeMap<String, usize> = TaskStatus::ALL
            .iter()
            .map(|s| (s.to_string(), 0))
            .collect();
        let mut penalty_totals = PenaltyBreakdown::default();
        let mut scores = Vec::new();
        let mut overdue = Vec::new();
        let mut total_rework_cycles = 0;
        let mut approved_extensions = 0;
        let grace = Duration::minutes(i64::from(config.overdue_grace_minutes));

        for task in tasks {
            *by_status.entry(task.status.to_string()).or_default() += 1;
            total_rework_cycles += task.rework_count;
            approved_extensions += task
                .extension_requests
                .iter()
                .filter(|r| r.status == ExtensionStatus::Approved)
                .count();

            if let Some(score) = task.score.filter(|_| task.status == TaskStatus::Done) {
                penalty_totals.extension_penalty += score.breakdown.extension_penalty;
                penalty_totals.delay_penalty += score.breakdown.delay_penalty;
                penalty_totals.rework_penalty += score.breakdown.rework_penalty;
                scores.push(ScoreSummary {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                    score,
                });
            }

            if let Some(due) = task.due_date {
                if task.is_overdue(now - grace) {
                    overdue.push(OverdueTask {
                        task_id: task.id.clone(),
                        title: task.title.clone(),
                        due_date: due,
                        minutes_overdue: (now - due).num_minutes(),
                    });
                }
            }
        }

        scores.sort_by_key(|s| s.score.final_score);
        overdue.sort_by(|a, b| b.minutes_overdue.cmp(&a.minutes_overdue));

        let average_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|s| f64::from(s.score.final_score)).sum::<f64>() / scores.len() as f64
        };

        Self {
            generated_at: now,
            total_tasks: tasks.len(),
            by_status,
            scored_tasks: scores.len(),
            average_score,
            penalty_totals,
            total_rework_cycles,
            approved_extensions,
            overdue,
            scores,
        }
    }
}
