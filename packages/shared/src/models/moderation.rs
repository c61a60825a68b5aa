use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationActionType {
    Hide,
    Delete,
    Warn,
    Suspend,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModerationAction {
    pub id: Uuid,
    pub moderator_id: Uuid,
    pub report_id: Option<Uuid>,
    pub target_post_id: Option<Uuid>,
    pub target_comment_id: Option<Uuid>,
    pub target_member_id: Option<Uuid>,
    pub action_type: ModerationActionType,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Validate for ModerationAction {
    fn validate(&self) -> ValidationResult {
        if self.target_post_id.is_none()
            && self.target_comment_id.is_none()
            && self.target_member_id.is_none()
        {
            return Err(ValidationError::new("target_post_id", "action has no target"));
        }
        validate::non_empty("reason", &self.reason)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModerationActionCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_post_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_comment_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_member_id: Option<Uuid>,
    pub action_type: ModerationActionType,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModerationActionSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ModerationActionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator_id: Option<Uuid>,
}
