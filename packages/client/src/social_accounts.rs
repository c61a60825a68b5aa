use shared::models::social_account::{SocialAccount, SocialAccountCreate};
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    /// Link an external identity to the current member.
    pub async fn link_social_account(
        &self,
        body: &SocialAccountCreate,
    ) -> ApiResult<SocialAccount> {
        self.post("/social-accounts", body).await
    }

    pub async fn unlink_social_account(&self, social_account_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/social-accounts/{}", social_account_id))
            .await
    }
}
