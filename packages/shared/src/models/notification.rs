use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestFrequency {
    Never,
    Daily,
    Weekly,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NotificationPreference {
    pub id: Uuid,
    pub member_id: Uuid,
    pub email_enabled: bool,
    pub push_enabled: bool,
    pub in_app_enabled: bool,
    pub digest_frequency: DigestFrequency,
    pub updated_at: DateTime<Utc>,
}

impl Validate for NotificationPreference {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotificationPreferenceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_app_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_frequency: Option<DigestFrequency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTarget {
    Board,
    Thread,
    Post,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Subscription {
    pub id: Uuid,
    pub member_id: Uuid,
    pub target_type: SubscriptionTarget,
    pub target_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Validate for Subscription {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubscriptionCreate {
    pub target_type: SubscriptionTarget,
    pub target_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubscriptionSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<SubscriptionTarget>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Validate for Notification {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("kind", &self.kind)?;
        validate::non_empty("title", &self.title)?;
        if let Some(read_at) = &self.read_at {
            validate::chronological("read_at", &self.created_at, read_at)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotificationSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
}
