use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    /// Set for replies to another comment.
    pub parent_id: Option<Uuid>,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Validate for Comment {
    fn validate(&self) -> ValidationResult {
        if self.parent_id == Some(self.id) {
            return Err(ValidationError::new("parent_id", "comment replies to itself"));
        }
        validate::non_empty("body", &self.body)?;
        validate::chronological("updated_at", &self.created_at, &self.updated_at)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommentCreate {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommentUpdate {
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CommentSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}
