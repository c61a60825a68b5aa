use shared::models::thread::{Thread, ThreadCreate, ThreadSearch, ThreadUpdate};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_thread(&self, body: &ThreadCreate) -> ApiResult<Thread> {
        self.post("/threads", body).await
    }

    pub async fn search_threads(&self, body: &ThreadSearch) -> ApiResult<Page<Thread>> {
        self.patch("/threads", body).await
    }

    pub async fn get_thread(&self, thread_id: Uuid) -> ApiResult<Thread> {
        self.get(&format!("/threads/{}", thread_id)).await
    }

    pub async fn update_thread(&self, thread_id: Uuid, body: &ThreadUpdate) -> ApiResult<Thread> {
        self.put(&format!("/threads/{}", thread_id), body).await
    }

    pub async fn delete_thread(&self, thread_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/threads/{}", thread_id)).await
    }
}
