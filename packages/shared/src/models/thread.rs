use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationResult};

pub const THREAD_TITLE_MAX: usize = 200;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Thread {
    pub id: Uuid,
    pub board_id: Uuid,
    pub topic_id: Option<Uuid>,
    pub author_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Validate for Thread {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("title", &self.title)?;
        validate::max_len("title", &self.title, THREAD_TITLE_MAX)?;
        validate::chronological("updated_at", &self.created_at, &self.updated_at)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThreadCreate {
    pub board_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<Uuid>,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThreadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThreadSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
