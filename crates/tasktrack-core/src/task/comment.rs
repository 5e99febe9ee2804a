//! Task comments (append-only).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Task;
use crate::error::ValidationError;

/// A comment left on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Append a comment. The body is trimmed and must not be empty.
    pub fn add_comment(
        &mut self,
        author: impl Into<String>,
        body: &str,
        at: DateTime<Utc>,
    ) -> Result<&Comment, ValidationError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ValidationError::MissingField("body"));
        }
        let index = self.comments.len();
        self.comments.push(Comment {
            id: format!("comment-{}", uuid::Uuid::new_v4()),
            author: author.into(),
            body: body.to_string(),
            created_at: at,
        });
        self.updated_at = at;
        Ok(&self.comments[index])
    }
}
