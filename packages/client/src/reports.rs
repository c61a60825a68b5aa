use shared::models::report::{Report, ReportCreate, ReportSearch};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn create_report(&self, body: &ReportCreate) -> ApiResult<Report> {
        self.post("/reports", body).await
    }

    pub async fn get_report(&self, report_id: Uuid) -> ApiResult<Report> {
        self.get(&format!("/reports/{}", report_id)).await
    }

    /// Moderator queue of reports.
    pub async fn search_reports(&self, body: &ReportSearch) -> ApiResult<Page<Report>> {
        self.patch("/moderator/reports", body).await
    }
}
