use shared::models::topic::{Topic, TopicCreate, TopicSearch, TopicUpdate};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_topic(&self, board_id: Uuid, body: &TopicCreate) -> ApiResult<Topic> {
        self.post(&format!("/boards/{}/topics", board_id), body)
            .await
    }

    pub async fn search_topics(
        &self,
        board_id: Uuid,
        body: &TopicSearch,
    ) -> ApiResult<Page<Topic>> {
        self.patch(&format!("/boards/{}/topics", board_id), body)
            .await
    }

    pub async fn get_topic(&self, board_id: Uuid, topic_id: Uuid) -> ApiResult<Topic> {
        self.get(&format!("/boards/{}/topics/{}", board_id, topic_id))
            .await
    }

    pub async fn update_topic(
        &self,
        board_id: Uuid,
        topic_id: Uuid,
        body: &TopicUpdate,
    ) -> ApiResult<Topic> {
        self.put(&format!("/boards/{}/topics/{}", board_id, topic_id), body)
            .await
    }

    pub async fn delete_topic(&self, board_id: Uuid, topic_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/boards/{}/topics/{}", board_id, topic_id))
            .await
    }
}
