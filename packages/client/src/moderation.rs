use shared::models::moderation::{ModerationAction, ModerationActionCreate, ModerationActionSearch};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_moderation_action(
        &self,
        body: &ModerationActionCreate,
    ) -> ApiResult<ModerationAction> {
        self.post("/moderator/actions", body).await
    }

    pub async fn search_moderation_actions(
        &self,
        body: &ModerationActionSearch,
    ) -> ApiResult<Page<ModerationAction>> {
        self.patch("/moderator/actions", body).await
    }

    pub async fn get_moderation_action(&self, action_id: Uuid) -> ApiResult<ModerationAction> {
        self.get(&format!("/moderator/actions/{}", action_id)).await
    }
}
