use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Open,
    Reviewed,
    Dismissed,
}

/// A member's complaint about a post or a comment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Report {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub reason: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Validate for Report {
    fn validate(&self) -> ValidationResult {
        if self.post_id.is_some() == self.comment_id.is_some() {
            return Err(ValidationError::new(
                "post_id",
                "exactly one of post_id and comment_id must be set",
            ));
        }
        validate::non_empty("reason", &self.reason)?;
        validate::chronological("updated_at", &self.created_at, &self.updated_at)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<Uuid>,
    pub reason: String,
}

impl ReportCreate {
    pub fn for_post(post_id: Uuid, reason: String) -> Self {
        Self {
            post_id: Some(post_id),
            comment_id: None,
            reason,
        }
    }

    pub fn for_comment(comment_id: Uuid, reason: String) -> Self {
        Self {
            post_id: None,
            comment_id: Some(comment_id),
            reason,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
}
