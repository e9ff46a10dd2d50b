//! 活动与评分标准存储操作

use super::SeaOrmStorage;
use crate::entity::criteria::Column as CriterionColumn;
use crate::entity::prelude::{Criteria, PeerReviews};
use crate::errors::{PeerReviewError, Result};
use crate::models::{criteria::entities::Criterion, peerreviews::entities::PeerReview};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过 ID 获取活动
    pub async fn get_peerreview_by_id_impl(&self, peerreview_id: i64) -> Result<Option<PeerReview>> {
        let result = PeerReviews::find_by_id(peerreview_id)
            .one(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询互评活动失败: {e}")))?;

        Ok(result.map(|m| m.into_peerreview()))
    }

    /// 列出评分标准（按序号升序）
    pub async fn list_criteria_impl(&self, peerreview_id: i64) -> Result<Vec<Criterion>> {
        let criteria = Criteria::find()
            .filter(CriterionColumn::PeerreviewId.eq(peerreview_id))
            .order_by_asc(CriterionColumn::Ordinal)
            .all(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询评分标准失败: {e}")))?;

        Ok(criteria.into_iter().map(|m| m.into_criterion()).collect())
    }
}
