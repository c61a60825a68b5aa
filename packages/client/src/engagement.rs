use shared::models::engagement::{EngagementStat, EngagementStatSearch};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn search_engagement_stats(
        &self,
        body: &EngagementStatSearch,
    ) -> ApiResult<Page<EngagementStat>> {
        self.patch("/admin/engagement-stats", body).await
    }

    pub async fn get_engagement_stat(&self, stat_id: Uuid) -> ApiResult<EngagementStat> {
        self.get(&format!("/admin/engagement-stats/{}", stat_id))
            .await
    }
}
