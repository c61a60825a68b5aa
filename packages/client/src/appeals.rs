use shared::models::appeal::{Appeal, AppealCreate, AppealResolution, AppealSearch, AppealUpdate};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_appeal(&self, body: &AppealCreate) -> ApiResult<Appeal> {
        self.post("/appeals", body).await
    }

    pub async fn search_appeals(&self, body: &AppealSearch) -> ApiResult<Page<Appeal>> {
        self.patch("/appeals", body).await
    }

    pub async fn get_appeal(&self, appeal_id: Uuid) -> ApiResult<Appeal> {
        self.get(&format!("/appeals/{}", appeal_id)).await
    }

    /// Only the appellant may edit, and only while the appeal is pending.
    pub async fn update_appeal(&self, appeal_id: Uuid, body: &AppealUpdate) -> ApiResult<Appeal> {
        self.put(&format!("/appeals/{}", appeal_id), body).await
    }

    pub async fn withdraw_appeal(&self, appeal_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/appeals/{}", appeal_id)).await
    }

    pub async fn resolve_appeal(
        &self,
        appeal_id: Uuid,
        body: &AppealResolution,
    ) -> ApiResult<Appeal> {
        self.put(&format!("/moderator/appeals/{}", appeal_id), body)
            .await
    }
}
