use shared::models::comment::{Comment, CommentCreate, CommentSearch, CommentUpdate};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_comment(&self, post_id: Uuid, body: &CommentCreate) -> ApiResult<Comment> {
        self.post(&format!("/posts/{}/comments", post_id), body)
            .await
    }

    pub async fn search_comments(
        &self,
        post_id: Uuid,
        body: &CommentSearch,
    ) -> ApiResult<Page<Comment>> {
        self.patch(&format!("/posts/{}/comments", post_id), body)
            .await
    }

    pub async fn get_comment(&self, post_id: Uuid, comment_id: Uuid) -> ApiResult<Comment> {
        self.get(&format!("/posts/{}/comments/{}", post_id, comment_id))
            .await
    }

    pub async fn update_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        body: &CommentUpdate,
    ) -> ApiResult<Comment> {
        self.put(&format!("/posts/{}/comments/{}", post_id, comment_id), body)
            .await
    }

    pub async fn delete_comment(&self, post_id: Uuid, comment_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/posts/{}/comments/{}", post_id, comment_id))
            .await
    }
}
