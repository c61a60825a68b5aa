use shared::models::vote::{Vote, VoteCreate, VoteSearch};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    /// One vote per member and post; a second vote is rejected.
    pub async fn cast_vote(&self, post_id: Uuid, body: &VoteCreate) -> ApiResult<Vote> {
        self.post(&format!("/posts/{}/votes", post_id), body).await
    }

    pub async fn search_votes(&self, post_id: Uuid, body: &VoteSearch) -> ApiResult<Page<Vote>> {
        self.patch(&format!("/posts/{}/votes", post_id), body).await
    }

    pub async fn retract_vote(&self, post_id: Uuid, vote_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/posts/{}/votes/{}", post_id, vote_id))
            .await
    }
}
