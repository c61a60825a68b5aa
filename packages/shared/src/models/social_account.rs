use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{self, Validate, ValidationResult};

/// External identity linked to a member. `(provider, social_id)` is unique
/// across the platform.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialAccount {
    pub id: Uuid,
    pub member_id: Uuid,
    pub provider: String,
    pub social_id: String,
    pub created_at: DateTime<Utc>,
}

impl Validate for SocialAccount {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("provider", &self.provider)?;
        validate::non_empty("social_id", &self.social_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialAccountCreate {
    pub provider: String,
    pub social_id: String,
}
