//! Due-date extension requests.
//!
//! An approved extension moves `due_date` forward. `original_due_date` is
//! never touched, which is what lets the scoring engine charge for the
//! consumed part of the extension window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Task;
use crate::error::{CoreError, Result, ValidationError};

/// Decision state of an extension request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Request to move a task's deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionRequest {
    pub id: String,
    pub requested_due_date: DateTime<Utc>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub requested_by: Option<String>,
    #[serde(default)]
    pub status: ExtensionStatus,
    pub requested_at: DateTime<Utc>,
    #[serde(default)]
    pub decided_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub decided_by: Option<String>,
}

impl ExtensionRequest {
    pub fn is_pending(&self) -> bool {
        self.status == ExtensionStatus::Pending
    }
}

impl Task {
    /// Pending extension requests.
    pub fn pending_extensions(&self) -> impl Iterator<Item = &ExtensionRequest> {
        self.extension_requests.iter().filter(|r| r.is_pending())
    }

    /// Open a new extension request.
    ///
    /// The task must be open and have a deadline, and the requested date must
    /// be strictly later than the deadline currently in force.
    pub fn request_extension(
        &mut self,
        requested_due_date: DateTime<Utc>,
        reason: Option<String>,
        requested_by: Option<String>,
        max_pending: usize,
        at: DateTime<Utc>,
    ) -> Result<&ExtensionRequest> {
        if self.is_terminal() {
            return Err(ValidationError::TaskClosed(self.id.clone()).into());
        }
        let current = self
            .due_date
            .ok_or(ValidationError::MissingField("due_date"))?;
        if requested_due_date <= current {
            return Err(ValidationError::ExtensionNotLater {
                requested: requested_due_date,
                current,
            }
            .into());
        }
        let pending = self.pending_extensions().count();
        if pending >= max_pending {
            return Err(ValidationError::TooManyPendingExtensions {
                task_id: self.id.clone(),
                pending,
            }
            .into());
        }

        let index = self.extension_requests.len();
        self.extension_requests.push(ExtensionRequest {
            id: format!("ext-{}", uuid::Uuid::new_v4()),
            requested_due_date,
            reason: reason.filter(|r| !r.trim().is_empty()),
            requested_by,
            status: ExtensionStatus::Pending,
            requested_at: at,
            decided_at: None,
            decided_by: None,
        });
        self.updated_at = at;
        Ok(&self.extension_requests[index])
    }

    /// Approve a pending request and move `due_date` to the requested date.
    ///
    /// The requested date must still be later than the deadline in force;
    /// otherwise the request stays pending and an error is returned.
    pub fn approve_extension(
        &mut self,
        request_id: &str,
        decided_by: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<ExtensionRequest> {
        if self.is_terminal() {
            return Err(ValidationError::TaskClosed(self.id.clone()).into());
        }
        let request = self.find_request(request_id)?;
        if !request.is_pending() {
            return Err(ValidationError::ExtensionAlreadyDecided(request_id.to_string()).into());
        }
        let requested = request.requested_due_date;
        if let Some(current) = self.due_date.filter(|current| requested <= *current) {
            return Err(ValidationError::ExtensionNotLater { requested, current }.into());
        }
        let request = self.decide(request_id, ExtensionStatus::Approved, decided_by, at)?;
        self.due_date = Some(request.requested_due_date);
        Ok(request)
    }

    /// Reject a pending request. Deadlines are unchanged.
    pub fn reject_extension(
        &mut self,
        request_id: &str,
        decided_by: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<ExtensionRequest> {
        if self.is_terminal() {
            return Err(ValidationError::TaskClosed(self.id.clone()).into());
        }
        self.decide(request_id, ExtensionStatus::Rejected, decided_by, at)
    }

    fn find_request(&self, request_id: &str) -> Result<&ExtensionRequest> {
        self.extension_requests
            .iter()
            .find(|r| r.id == request_id)
            .ok_or_else(|| CoreError::NotFound {
                kind: "Extension request",
                id: request_id.to_string(),
            })
    }

    fn decide(
        &mut self,
        request_id: &str,
        status: ExtensionStatus,
        decided_by: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<ExtensionRequest> {
        let request = self
            .extension_requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| CoreError::NotFound {
                kind: "Extension request",
                id: request_id.to_string(),
            })?;
        if !request.is_pending() {
            return Err(ValidationError::ExtensionAlreadyDecided(request_id.to_string()).into());
        }
        request.status = status;
        request.decided_at = Some(at);
        request.decided_by = decided_by;
        let decided = request.clone();
        self.updated_at = at;
        Ok(decided)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn task_due_in_a_day() -> Task {
        Task::new_at("Ship release", t0()).with_due_date(t0() + Duration::days(1))
    }

    #[test]
    fn approve_moves_due_date_only() {
        let mut task = task_due_in_a_day();
        let new_due = t0() + Duration::days(3);
        let id = task
            .request_extension(new_due, Some("vendor delay".into()), None, 1, t0())
            .unwrap()
            .id
            .clone();

        let approved = task
            .approve_extension(&id, Some("lead".into()), t0() + Duration::hours(1))
            .unwrap();

        assert_eq!(approved.status, ExtensionStatus::Approved);
        assert_eq!(approved.decided_by.as_deref(), Some("lead"));
        assert_eq!(task.due_date, Some(new_due));
        assert_eq!(task.original_due_date, Some(t0() + Duration::days(1)));
    }

    #[test]
    fn reject_keeps_deadlines() {
        let mut task = task_due_in_a_day();
        let id = task
            .request_extension(t0() + Duration::days(2), None, None, 1, t0())
            .unwrap()
            .id
            .clone();
        let rejected = task.reject_extension(&id, None, t0()).unwrap();
        assert_eq!(rejected.status, ExtensionStatus::Rejected);
        assert_eq!(task.due_date, task.original_due_date);
        assert_eq!(task.pending_extensions().count(), 0);
    }

    #[test]
    fn request_must_be_later_than_current_due() {
        let mut task = task_due_in_a_day();
        let err = task
            .request_extension(t0() + Duration::days(1), None, None, 1, t0())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::ExtensionNotLater { .. })
        ));
    }

    #[test]
    fn request_requires_a_deadline() {
        let mut task = Task::new_at("No deadline", t0());
        let err = task
            .request_extension(t0() + Duration::days(1), None, None, 1, t0())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MissingField("due_date"))
        ));
    }

    #[test]
    fn pending_limit_is_enforced() {
        let mut task = task_due_in_a_day();
        task.request_extension(t0() + Duration::days(2), None, None, 1, t0())
            .unwrap();
        let err = task
            .request_extension(t0() + Duration::days(3), None, None, 1, t0())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooManyPendingExtensions { pending: 1, .. })
        ));
    }

    #[test]
    fn decision_is_final() {
        let mut task = task_due_in_a_day();
        let id = task
            .request_extension(t0() + Duration::days(2), None, None, 1, t0())
            .unwrap()
            .id
            .clone();
        task.approve_extension(&id, None, t0()).unwrap();
        assert!(task.reject_extension(&id, None, t0()).is_err());
        assert!(task.approve_extension(&id, None, t0()).is_err());
    }

    #[test]
    fn closed_task_rejects_requests() {
        let mut task = task_due_in_a_day();
        task.status = TaskStatus::Done;
        assert!(task
            .request_extension(t0() + Duration::days(2), None, None, 1, t0())
            .is_err());
    }

    #[test]
    fn unknown_request_is_not_found() {
        let mut task = task_due_in_a_day();
        let err = task.approve_extension("ext-missing", None, t0()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn approving_a_nearer_request_cannot_pull_the_deadline_back() {
        let mut task = task_due_in_a_day();
        let far = task
            .request_extension(t0() + Duration::days(4), None, None, 2, t0())
            .unwrap()
            .id
            .clone();
        let near = task
            .request_extension(t0() + Duration::days(2), None, None, 2, t0())
            .unwrap()
            .id
            .clone();
        task.approve_extension(&far, None, t0()).unwrap();

        let err = task.approve_extension(&near, None, t0()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::ExtensionNotLater { .. })
        ));
        assert_eq!(task.due_date, Some(t0() + Duration::days(4)));
        assert_eq!(task.pending_extensions().count(), 1);

        task.reject_extension(&near, None, t0()).unwrap();
        assert_eq!(task.pending_extensions().count(), 0);
    }

    #[test]
    fn closed_task_rejects_decisions() {
        let mut task = task_due_in_a_day();
        let id = task
            .request_extension(t0() + Duration::days(2), None, None, 1, t0())
            .unwrap()
            .id
            .clone();
        task.status = TaskStatus::Cancelled;
        let before = task.updated_at;

        let err = task.reject_extension(&id, None, t0() + Duration::hours(1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TaskClosed(_))
        ));
        assert_eq!(task.updated_at, before);
        assert_eq!(task.pending_extensions().count(), 1);
    }
}
