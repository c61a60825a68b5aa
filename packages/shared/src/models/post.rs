use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationResult};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Validate for Post {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("title", &self.title)?;
        validate::non_empty("body", &self.body)?;
        validate::chronological("updated_at", &self.created_at, &self.updated_at)?;
        if let Some(deleted_at) = &self.deleted_at {
            validate::chronological("deleted_at", &self.created_at, deleted_at)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostCreate {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,
    /// Full-text filter over title and body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
