use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppealStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A member's request to reverse a moderation action taken against them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Appeal {
    pub id: Uuid,
    pub appellant_id: Uuid,
    pub moderation_action_id: Uuid,
    pub reason: String,
    pub status: AppealStatus,
    pub resolution_note: Option<String>,
    pub resolved_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Validate for Appeal {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("reason", &self.reason)?;
        validate::chronological("updated_at", &self.created_at, &self.updated_at)?;
        match (self.status, &self.resolved_at) {
            (AppealStatus::Pending, Some(_)) => Err(ValidationError::new(
                "resolved_at",
                "pending appeal carries a resolution time",
            )),
            (AppealStatus::Accepted | AppealStatus::Rejected, None) => Err(ValidationError::new(
                "resolved_at",
                "resolved appeal has no resolution time",
            )),
            (_, Some(resolved_at)) => {
                validate::chronological("resolved_at", &self.created_at, resolved_at)
            }
            (AppealStatus::Pending, None) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppealCreate {
    pub moderation_action_id: Uuid,
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppealUpdate {
    pub reason: String,
}

/// Moderator decision on a pending appeal.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppealResolution {
    pub status: AppealStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppealSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppealStatus>,
}
