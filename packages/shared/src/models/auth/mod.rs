pub mod requests;
pub mod responses;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity classes the backend authenticates separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Member,
    Moderator,
    Administrator,
}

impl ActorRole {
    /// Segment used in `/auth/{role}/...` routes.
    pub fn path_segment(self) -> &'static str {
        match self {
            ActorRole::Member => "member",
            ActorRole::Moderator => "moderator",
            ActorRole::Administrator => "admin",
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ActorRole::Member => write!(f, "member"),
            ActorRole::Moderator => write!(f, "moderator"),
            ActorRole::Administrator => write!(f, "administrator"),
        }
    }
}
