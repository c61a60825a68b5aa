use shared::models::administrator::{
    Administrator, AdministratorSearch, AdministratorUpdate, AuditLog, AuditLogSearch,
};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn search_administrators(
        &self,
        body: &AdministratorSearch,
    ) -> ApiResult<Page<Administrator>> {
        self.patch("/admin/administrators", body).await
    }

    pub async fn get_administrator(&self, administrator_id: Uuid) -> ApiResult<Administrator> {
        self.get(&format!("/admin/administrators/{}", administrator_id))
            .await
    }

    pub async fn update_administrator(
        &self,
        administrator_id: Uuid,
        body: &AdministratorUpdate,
    ) -> ApiResult<Administrator> {
        self.put(&format!("/admin/administrators/{}", administrator_id), body)
            .await
    }

    pub async fn search_audit_logs(&self, body: &AuditLogSearch) -> ApiResult<Page<AuditLog>> {
        self.patch("/admin/audit-logs", body).await
    }

    pub async fn get_audit_log(&self, audit_log_id: Uuid) -> ApiResult<AuditLog> {
        self.get(&format!("/admin/audit-logs/{}", audit_log_id))
            .await
    }
}
