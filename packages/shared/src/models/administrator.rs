use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationResult};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Administrator {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub is_super: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Validate for Administrator {
    fn validate(&self) -> ValidationResult {
        validate::email("email", &self.email)?;
        validate::non_empty("username", &self.username)?;
        validate::chronological("updated_at", &self.created_at, &self.updated_at)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdministratorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_super: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdministratorSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Record of a privileged operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub action: String,
    pub target_type: String,
    pub target_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Validate for AuditLog {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("action", &self.action)?;
        validate::non_empty("target_type", &self.target_type)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuditLogSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}
