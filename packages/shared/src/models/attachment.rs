use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{self, Validate, ValidationError, ValidationResult};

/// Upload size ceiling enforced by the backend, in bytes.
pub const ATTACHMENT_SIZE_MAX: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Attachment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub uploader_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Validate for Attachment {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("file_name", &self.file_name)?;
        validate::http_url("file_url", &self.file_url)?;
        if !self.mime_type.contains('/') {
            return Err(ValidationError::new(
                "mime_type",
                format!("`{}` is not a media type", self.mime_type),
            ));
        }
        if self.size_bytes > ATTACHMENT_SIZE_MAX {
            return Err(ValidationError::new(
                "size_bytes",
                format!("{} exceeds {}", self.size_bytes, ATTACHMENT_SIZE_MAX),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttachmentCreate {
    pub file_name: String,
    pub file_url: String,
    pub mime_type: String,
    pub size_bytes: u64,
}
