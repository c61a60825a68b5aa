use shared::models::post::{Post, PostCreate, PostSearch, PostUpdate};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_post(&self, thread_id: Uuid, body: &PostCreate) -> ApiResult<Post> {
        self.post(&format!("/threads/{}/posts", thread_id), body)
            .await
    }

    pub async fn search_posts(&self, thread_id: Uuid, body: &PostSearch) -> ApiResult<Page<Post>> {
        self.patch(&format!("/threads/{}/posts", thread_id), body)
            .await
    }

    pub async fn get_post(&self, thread_id: Uuid, post_id: Uuid) -> ApiResult<Post> {
        self.get(&format!("/threads/{}/posts/{}", thread_id, post_id))
            .await
    }

    pub async fn update_post(
        &self,
        thread_id: Uuid,
        post_id: Uuid,
        body: &PostUpdate,
    ) -> ApiResult<Post> {
        self.put(&format!("/threads/{}/posts/{}", thread_id, post_id), body)
            .await
    }

    pub async fn delete_post(&self, thread_id: Uuid, post_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/threads/{}/posts/{}", thread_id, post_id))
            .await
    }
}
