//! Task scoring engine.
//!
//! Converts a completed task's lifecycle timestamps into a bounded penalty
//! score. Three categories contribute, each capped at
//! [`MAX_PENALTY_PER_CATEGORY`]:
//!
//! ```text
//! extension = min(25, extension_minutes * PPM * 10 * usage_ratio)
//! delay     = min(25, delay_minutes * PPM)
//! rework    = min(25, 3^rework_count)          (0 when rework_count == 0)
//!
//! final     = max(-75, round(-(extension + delay + rework)))
//! ```
//!
//! where `PPM = 10 / 1440` penalty points per minute.
//!
//! The calculator is a pure function of a [`TaskSnapshot`]. It never fails:
//! missing fields degrade to a smaller score instead of an error.
//!
//! ## Rounding
//!
//! Every breakdown component is rounded on its own, as is the final score.
//! The sum of the rounded components can therefore differ from
//! `-final_score` by one point. Rounding is half-up (`floor(x + 0.5)`), so
//! a raw total of exactly 2.5 yields a final score of -2.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cap applied to each penalty category.
pub const MAX_PENALTY_PER_CATEGORY: f64 = 25.0;

/// Lowest possible final score (three categories at their cap).
pub const MIN_FINAL_SCORE: i32 = -75;

/// Penalty points per minute: a full day is worth 10 points.
pub const PENALTY_POINTS_PER_MINUTE: f64 = 10.0 / (24.0 * 60.0);

/// Extra weight on consumed extension time.
pub const EXTENSION_MULTIPLIER: f64 = 10.0;

/// Base of the exponential rework penalty.
pub const REWORK_PENALTY_BASE: f64 = 3.0;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Read-only view of the task fields the scoring engine needs.
///
/// Field names also accept the camelCase spelling (`originalDueDate`,
/// `dueDate`, `completedAt`, `reworkCount`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// First committed deadline, fixed at creation.
    #[serde(default, alias = "originalDueDate")]
    pub original_due_date: Option<DateTime<Utc>>,
    /// Deadline currently in force (moved by approved extensions).
    #[serde(default, alias = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
    /// Completion time; absent while the task is open.
    #[serde(default, alias = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Number of rework cycles; absent is treated as zero.
    #[serde(default, alias = "reworkCount")]
    pub rework_count: Option<u32>,
}

impl TaskSnapshot {
    /// Snapshot of a task completed at `at` with no other fields set.
    pub fn completed(at: DateTime<Utc>) -> Self {
        Self {
            completed_at: Some(at),
            ..Self::default()
        }
    }

    /// Set both the original and the current due date.
    pub fn with_due_dates(mut self, original: DateTime<Utc>, current: DateTime<Utc>) -> Self {
        self.original_due_date = Some(original);
        self.due_date = Some(current);
        self
    }

    /// Set the rework count.
    pub fn with_rework_count(mut self, count: u32) -> Self {
        self.rework_count = Some(count);
        self
    }
}

/// Rounded per-category penalties, each in `[0, 25]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyBreakdown {
    pub extension_penalty: i32,
    pub delay_penalty: i32,
    pub rework_penalty: i32,
}

impl PenaltyBreakdown {
    /// Sum of the rounded components.
    ///
    /// May differ from `-final_score` by one because each component is
    /// rounded independently.
    pub fn total(&self) -> i32 {
        self.extension_penalty + self.delay_penalty + self.rework_penalty
    }
}

/// Result of scoring a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskScore {
    /// Final score in `[-75, 0]`.
    pub final_score: i32,
    pub breakdown: PenaltyBreakdown,
}

impl TaskScore {
    /// Score of a task that cannot be scored yet.
    pub fn unscored() -> Self {
        Self::default()
    }
}

/// Unrounded intermediates of a scoring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PenaltyDetail {
    /// `completed_at` was present.
    pub scoreable: bool,
    /// Both due dates were present, so time-based penalties apply.
    pub time_based: bool,
    /// Size of the granted extension window in minutes.
    pub extension_minutes: f64,
    /// Share of the extension window consumed, in `[0, 1]`.
    pub extension_usage_ratio: f64,
    /// Minutes past the current due date.
    pub delay_minutes: f64,
    pub extension_penalty: f64,
    pub delay_penalty: f64,
    pub rework_penalty: f64,
    /// Sum of the three raw penalties.
    pub total_penalty: f64,
}

impl PenaltyDetail {
    /// Round the raw penalties into a [`TaskScore`].
    pub fn score(&self) -> TaskScore {
        if !self.scoreable {
            return TaskScore::unscored();
        }

        let rework_penalty = round_half_up(self.rework_penalty);
        if !self.time_based {
            return TaskScore {
                final_score: (-rework_penalty).max(MIN_FINAL_SCORE),
                breakdown: PenaltyBreakdown {
                    rework_penalty,
                    ..PenaltyBreakdown::default()
                },
            };
        }

        TaskScore {
            final_score: round_half_up(-self.total_penalty).max(MIN_FINAL_SCORE),
            breakdown: PenaltyBreakdown {
                extension_penalty: round_half_up(self.extension_penalty),
                delay_penalty: round_half_up(self.delay_penalty),
                rework_penalty,
            },
        }
    }
}

/// Score a task snapshot.
///
/// Returns a zero score for tasks without `completed_at`, a rework-only score
/// when either due date is missing, and the full three-category score
/// otherwise. Never panics.
pub fn calculate_task_score(snapshot: &TaskSnapshot) -> TaskScore {
    explain_task_score(snapshot).score()
}

/// Compute the raw penalties behind [`calculate_task_score`].
pub fn explain_task_score(snapshot: &TaskSnapshot) -> PenaltyDetail {
    let Some(completed_at) = snapshot.completed_at else {
        return PenaltyDetail::default();
    };

    let rework = rework_penalty(snapshot.rework_count.unwrap_or(0));

    let (Some(original_due), Some(due)) = (snapshot.original_due_date, snapshot.due_date) else {
        return PenaltyDetail {
            scoreable: true,
            rework_penalty: rework,
            total_penalty: rework,
            ..PenaltyDetail::default()
        };
    };

    let planned = original_due.timestamp_millis();
    let expected = due.timestamp_millis();
    let end = completed_at.timestamp_millis();

    let window_ms = expected.saturating_sub(planned);
    let extension_minutes = window_ms.max(0) as f64 / MS_PER_MINUTE;
    let extension_usage_ratio = if window_ms == 0 {
        0.0
    } else {
        (end.saturating_sub(planned) as f64 / window_ms as f64).clamp(0.0, 1.0)
    };
    let extension_penalty = (extension_minutes
        * PENALTY_POINTS_PER_MINUTE
        * EXTENSION_MULTIPLIER
        * extension_usage_ratio)
        .min(MAX_PENALTY_PER_CATEGORY);

    let delay_minutes = end.saturating_sub(expected).max(0) as f64 / MS_PER_MINUTE;
    let delay_penalty = (delay_minutes * PENALTY_POINTS_PER_MINUTE).min(MAX_PENALTY_PER_CATEGORY);

    PenaltyDetail {
        scoreable: true,
        time_based: true,
        extension_minutes,
        extension_usage_ratio,
        delay_minutes,
        extension_penalty,
        delay_penalty,
        rework_penalty: rework,
        total_penalty: extension_penalty + delay_penalty + rework,
    }
}

/// Exponential rework penalty: 0, 3, 9, then capped at 25.
pub fn rework_penalty(rework_count: u32) -> f64 {
    if rework_count == 0 {
        return 0.0;
    }
    // 3^3 already exceeds the cap; bounding the exponent keeps powi finite.
    let exponent = rework_count.min(8) as i32;
    REWORK_PENALTY_BASE
        .powi(exponent)
        .min(MAX_PENALTY_PER_CATEGORY)
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
