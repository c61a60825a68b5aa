use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ActorRole;
use crate::validate::{self, Validate, ValidationResult};

/// Bearer credential pair issued by join, login and refresh.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuthorizationToken {
    pub access: String,
    pub refresh: String,
    pub expired_at: DateTime<Utc>,
    pub refreshable_until: DateTime<Utc>,
}

impl Validate for AuthorizationToken {
    fn validate(&self) -> ValidationResult {
        validate::non_empty("access", &self.access)?;
        validate::non_empty("refresh", &self.refresh)?;
        validate::chronological(
            "refreshable_until",
            &self.expired_at,
            &self.refreshable_until,
        )
    }
}

/// Profile of the authenticated actor together with its tokens.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuthorizedActor {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: ActorRole,
    pub created_at: DateTime<Utc>,
    pub token: AuthorizationToken,
}

impl Validate for AuthorizedActor {
    fn validate(&self) -> ValidationResult {
        validate::email("email", &self.email)?;
        validate::non_empty("username", &self.username)?;
        self.token.validate().map_err(|e| e.within("token"))
    }
}

/// Claims carried by JWT access tokens.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenClaims {
    pub sub: String, // subject (actor ID)
    pub exp: usize,  // expiration time
    pub iat: usize,  // issued at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ActorRole>,
}
