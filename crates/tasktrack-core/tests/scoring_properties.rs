//! Property tests for the scoring engine.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use tasktrack_core::{calculate_task_score, explain_task_score, TaskSnapshot};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

/// Offsets up to roughly a year either side of the base instant.
fn offset() -> impl Strategy<Value = Option<i64>> {
    proptest::option::of(-525_600i64..525_600)
}

fn snapshot() -> impl Strategy<Value = TaskSnapshot> {
    (offset(), offset(), offset(), proptest::option::of(any::<u32>())).prop_map(
        |(original, due, completed, rework)| TaskSnapshot {
            original_due_date: original.map(|m| base() + Duration::minutes(m)),
            due_date: due.map(|m| base() + Duration::minutes(m)),
            completed_at: completed.map(|m| base() + Duration::minutes(m)),
            rework_count: rework,
        },
    )
}

proptest! {
    #[test]
    fn final_score_is_bounded(snapshot in snapshot()) {
        let score = calculate_task_score(&snapshot);
        prop_assert!((-75..=0).contains(&score.final_score));
        for component in [
            score.breakdown.extension_penalty,
            score.breakdown.delay_penalty,
            score.breakdown.rework_penalty,
        ] {
            prop_assert!((0..=25).contains(&component));
        }
    }

    #[test]
    fn breakdown_reconciles_within_rounding(snapshot in snapshot()) {
        let score = calculate_task_score(&snapshot);
        let gap = (score.breakdown.total() + score.final_score).abs();
        prop_assert!(gap <= 1, "breakdown {:?} vs final {}", score.breakdown, score.final_score);
    }

    #[test]
    fn open_tasks_always_score_zero(mut snapshot in snapshot()) {
        snapshot.completed_at = None;
        let score = calculate_task_score(&snapshot);
        prop_assert_eq!(score.final_score, 0);
        prop_assert_eq!(score.breakdown.total(), 0);
    }

    #[test]
    fn no_rework_means_no_rework_penalty(mut snapshot in snapshot(), zero in any::<bool>()) {
        snapshot.rework_count = if zero { Some(0) } else { None };
        prop_assert_eq!(calculate_task_score(&snapshot).breakdown.rework_penalty, 0);
    }

    #[test]
    fn usage_ratio_stays_in_unit_interval(snapshot in snapshot()) {
        let detail = explain_task_score(&snapshot);
        prop_assert!((0.0..=1.0).contains(&detail.extension_usage_ratio));
        prop_assert!(detail.extension_minutes >= 0.0);
        prop_assert!(detail.delay_minutes >= 0.0);
    }

    #[test]
    fn scoring_is_deterministic(snapshot in snapshot()) {
        prop_assert_eq!(calculate_task_score(&snapshot), calculate_task_score(&snapshot));
    }

    #[test]
    fn finishing_later_never_improves_the_score(
        extension in 0i64..10_000,
        early in 0i64..20_000,
        extra in 0i64..20_000,
    ) {
        let original = base();
        let due = original + Duration::minutes(extension);
        let first = TaskSnapshot::completed(original + Duration::minutes(early))
            .with_due_dates(original, due);
        let later = TaskSnapshot::completed(original + Duration::minutes(early + extra))
            .with_due_dates(original, due);
        prop_assert!(
            calculate_task_score(&later).final_score <= calculate_task_score(&first).final_score
        );
    }
}
