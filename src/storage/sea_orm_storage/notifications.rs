//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::ActiveModel;
use crate::errors::{PeerReviewError, Result};
use crate::models::notifications::{entities::Notification, requests::CreateNotificationRequest};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建通知
    pub async fn create_notification_impl(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            notification_type: Set(req.notification_type),
            title: Set(req.title),
            content: Set(req.content),
            reference_id: Set(req.reference_id),
            is_read: Set(false),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("创建通知失败: {e}")))?;

        Ok(result.into_notification())
    }
}
