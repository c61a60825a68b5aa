use shared::models::auth::requests::{JoinRequest, LoginRequest, RefreshRequest};
use shared::models::auth::responses::AuthorizedActor;
use shared::models::auth::ActorRole;

use crate::{ApiResult, Connection};

impl Connection {
    /// Register a new actor of `role`.
    pub async fn join(&self, role: ActorRole, body: &JoinRequest) -> ApiResult<AuthorizedActor> {
        self.post(&format!("/auth/{}/join", role.path_segment()), body)
            .await
    }

    pub async fn login(&self, role: ActorRole, body: &LoginRequest) -> ApiResult<AuthorizedActor> {
        self.post(&format!("/auth/{}/login", role.path_segment()), body)
            .await
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn refresh(
        &self,
        role: ActorRole,
        body: &RefreshRequest,
    ) -> ApiResult<AuthorizedActor> {
        self.post(&format!("/auth/{}/refresh", role.path_segment()), body)
            .await
    }
}
