use shared::models::attachment::{Attachment, AttachmentCreate};
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_attachment(
        &self,
        post_id: Uuid,
        body: &AttachmentCreate,
    ) -> ApiResult<Attachment> {
        self.post(&format!("/posts/{}/attachments", post_id), body)
            .await
    }

    pub async fn list_attachments(&self, post_id: Uuid) -> ApiResult<Vec<Attachment>> {
        self.get(&format!("/posts/{}/attachments", post_id)).await
    }

    pub async fn get_attachment(
        &self,
        post_id: Uuid,
        attachment_id: Uuid,
    ) -> ApiResult<Attachment> {
        self.get(&format!("/posts/{}/attachments/{}", post_id, attachment_id))
            .await
    }

    pub async fn delete_attachment(&self, post_id: Uuid, attachment_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/posts/{}/attachments/{}", post_id, attachment_id))
            .await
    }
}
