use shared::models::board::{Board, BoardCreate, BoardSearch, BoardUpdate};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_board(&self, body: &BoardCreate) -> ApiResult<Board> {
        self.post("/boards", body).await
    }

    pub async fn search_boards(&self, body: &BoardSearch) -> ApiResult<Page<Board>> {
        self.patch("/boards", body).await
    }

    pub async fn get_board(&self, board_id: Uuid) -> ApiResult<Board> {
        self.get(&format!("/boards/{}", board_id)).await
    }

    pub async fn update_board(&self, board_id: Uuid, body: &BoardUpdate) -> ApiResult<Board> {
        self.put(&format!("/boards/{}", board_id), body).await
    }

    pub async fn delete_board(&self, board_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/boards/{}", board_id)).await
    }
}
