//! 参与者存储操作

use super::SeaOrmStorage;
use crate::entity::participants::{Column, Entity as Participants};
use crate::errors::{PeerReviewError, Result};
use crate::models::peerreviews::entities::Capability;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 列出具有指定权限的用户 ID
    pub async fn list_users_with_capability_impl(
        &self,
        peerreview_id: i64,
        capability: Capability,
    ) -> Result<Vec<i64>> {
        let capability_column = match capability {
            Capability::Submit => Column::CanSubmit,
            Capability::Grade => Column::CanGrade,
        };

        let users: Vec<i64> = Participants::find()
            .select_only()
            .column(Column::UserId)
            .filter(Column::PeerreviewId.eq(peerreview_id))
            .filter(capability_column.eq(true))
            .order_by_asc(Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询活动参与者失败: {e}")))?;

        Ok(users)
    }
}
