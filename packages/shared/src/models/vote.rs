use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{Validate, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vote {
    pub id: Uuid,
    pub post_id: Uuid,
    pub voter_id: Uuid,
    pub vote_type: VoteType,
    pub created_at: DateTime<Utc>,
}

// Shape is fully enforced by decoding.
impl Validate for Vote {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VoteCreate {
    pub vote_type: VoteType,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VoteSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_type: Option<VoteType>,
}
