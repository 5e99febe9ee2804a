//! Integration tests for reporting through the service.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tasktrack_core::{Config, ManualClock, TaskReport, TaskService, TransitionAction};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 3, 9, 0, 0).unwrap()
}

#[test]
fn report_covers_scores_overdue_and_extensions() {
    let clock = ManualClock::new(t0());
    let mut svc = TaskService::in_memory().with_clock(clock.clone());

    let late = svc.create_task("Late task").unwrap();
    svc.set_due_date(&late.id, t0() + Duration::days(1)).unwrap();
    svc.apply(&late.id, TransitionAction::Start).unwrap();

    let extended = svc.create_task("Extended task").unwrap();
    svc.set_due_date(&extended.id, t0() + Duration::days(1)).unwrap();
    let request = svc
        .request_extension(&extended.id, t0() + Duration::days(10), None, None)
        .unwrap();
    svc.approve_extension(&extended.id, &request.id, None).unwrap();

    let stalled = svc.create_task("Stalled task").unwrap();
    svc.set_due_date(&stalled.id, t0() + Duration::hours(12)).unwrap();

    clock.advance(Duration::days(2));
    svc.apply(&late.id, TransitionAction::Complete).unwrap();

    let report = svc.report().unwrap();
    assert_eq!(report.total_tasks, 3);
    assert_eq!(report.by_status["done"], 1);
    assert_eq!(report.by_status["to_do"], 2);
    assert_eq!(report.scored_tasks, 1);
    assert_eq!(report.scores[0].score.breakdown.delay_penalty, 10);
    assert_eq!(report.average_score, -10.0);
    assert_eq!(report.approved_extensions, 1);

    // Only the stalled task is past its deadline; the extended one is not.
    assert_eq!(report.overdue.len(), 1);
    assert_eq!(report.overdue[0].title, "Stalled task");
    assert_eq!(report.overdue[0].minutes_overdue, 36 * 60);
}

#[test]
fn report_json_shape() {
    let report = TaskReport::build(&[], t0(), &Config::default().report);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["penalty_totals"]["extensionPenalty"], 0);
    assert!(json["by_status"].get("under_review").is_some());
}
