use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationResult};

/// Aggregated activity counters over one reporting period.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngagementStat {
    pub id: Uuid,
    /// `None` for platform-wide aggregates.
    pub board_id: Option<Uuid>,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub post_count: i64,
    pub comment_count: i64,
    pub vote_count: i64,
    pub active_members: i64,
}

impl Validate for EngagementStat {
    fn validate(&self) -> ValidationResult {
        validate::chronological("period_end", &self.period_start, &self.period_end)?;
        validate::non_negative("post_count", self.post_count)?;
        validate::non_negative("comment_count", self.comment_count)?;
        validate::non_negative("vote_count", self.vote_count)?;
        validate::non_negative("active_members", self.active_members)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EngagementStatSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end_to: Option<DateTime<Utc>>,
}
