use serde_json::json;
use shared::models::notification::{
    Notification, NotificationPreference, NotificationPreferenceUpdate, NotificationSearch,
    Subscription, SubscriptionCreate, SubscriptionSearch,
};
use shared::Page;
use uuid::Uuid;

use crate::{ApiResult, Connection};

impl Connection {
    pub async fn get_notification_preferences(&self) -> ApiResult<NotificationPreference> {
        self.get("/notifications/preferences").await
    }

    pub async fn update_notification_preferences(
        &self,
        body: &NotificationPreferenceUpdate,
    ) -> ApiResult<NotificationPreference> {
        self.put("/notifications/preferences", body).await
    }

    pub async fn search_notifications(
        &self,
        body: &NotificationSearch,
    ) -> ApiResult<Page<Notification>> {
        self.patch("/notifications", body).await
    }

    pub async fn mark_notification_read(&self, notification_id: Uuid) -> ApiResult<Notification> {
        self.put(
            &format!("/notifications/{}/read", notification_id),
            &json!({}),
        )
        .await
    }

    pub async fn subscribe(&self, body: &SubscriptionCreate) -> ApiResult<Subscription> {
        self.post("/subscriptions", body).await
    }

    pub async fn search_subscriptions(
        &self,
        body: &SubscriptionSearch,
    ) -> ApiResult<Page<Subscription>> {
        self.patch("/subscriptions", body).await
    }

    pub async fn unsubscribe(&self, subscription_id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/subscriptions/{}", subscription_id))
            .await
    }
}
