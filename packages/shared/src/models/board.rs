use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagination::PageRequest;
use crate::validate::{self, Validate, ValidationResult};

pub const BOARD_NAME_MAX: usize = 120;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Validate for Board {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("name", &self.name)?;
        validate::max_len("name", &self.name, BOARD_NAME_MAX)?;
        validate::chronological("updated_at", &self.created_at, &self.updated_at)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoardSearch {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
