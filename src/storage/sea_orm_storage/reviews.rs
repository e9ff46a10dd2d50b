//! 评审存储操作
//!
//! 评审的勾选结果存放在独立的表中，读取时按评审 ID 批量加载。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::review_criteria::{
    ActiveModel as ReviewCriterionActiveModel, Column as ReviewCriterionColumn,
    Entity as ReviewCriteria,
};
use crate::entity::reviews::{ActiveModel, Column, Entity as Reviews, Model as ReviewModel};
use crate::errors::{PeerReviewError, Result};
use crate::models::reviews::entities::{CriterionChecks, Review};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 为评审记录批量加载勾选结果
    async fn attach_checks(&self, models: Vec<ReviewModel>) -> Result<Vec<Review>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let review_ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let rows = ReviewCriteria::find()
            .filter(ReviewCriterionColumn::ReviewId.is_in(review_ids))
            .all(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询评审勾选记录失败: {e}")))?;

        let mut checks_by_review: HashMap<i64, CriterionChecks> = HashMap::new();
        for row in rows {
            let position = usize::try_from(row.criterion).map_err(|_| {
                PeerReviewError::data_integrity(format!(
                    "评审 {} 的勾选记录位置无效: {}",
                    row.review_id, row.criterion
                ))
            })?;
            checks_by_review
                .entry(row.review_id)
                .or_default()
                .set(position, row.checked);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let checks = checks_by_review.remove(&m.id).unwrap_or_default();
                m.into_review(checks)
            })
            .collect())
    }

    /// 列出被评审人已完成的评审（按 ID 升序）
    pub async fn list_reviews_of_reviewee_impl(
        &self,
        peerreview_id: i64,
        reviewee_id: i64,
    ) -> Result<Vec<Review>> {
        let models = Reviews::find()
            .filter(Column::PeerreviewId.eq(peerreview_id))
            .filter(Column::RevieweeId.eq(reviewee_id))
            .filter(Column::Completed.eq(true))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询评审列表失败: {e}")))?;

        self.attach_checks(models).await
    }

    /// 列出活动中全部已完成的评审
    pub async fn list_completed_reviews_impl(&self, peerreview_id: i64) -> Result<Vec<Review>> {
        let models = Reviews::find()
            .filter(Column::PeerreviewId.eq(peerreview_id))
            .filter(Column::Completed.eq(true))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询评审列表失败: {e}")))?;

        self.attach_checks(models).await
    }

    /// 统计已完成的教师评审数
    pub async fn count_moderations_impl(&self, peerreview_id: i64) -> Result<i64> {
        let count = Reviews::find()
            .filter(Column::PeerreviewId.eq(peerreview_id))
            .filter(Column::Completed.eq(true))
            .filter(Column::TeacherReview.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询教师评审数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 统计某用户完成的同学评审数
    pub async fn count_reviews_completed_by_impl(
        &self,
        peerreview_id: i64,
        reviewer_id: i64,
    ) -> Result<i64> {
        let count = Reviews::find()
            .filter(Column::PeerreviewId.eq(peerreview_id))
            .filter(Column::ReviewerId.eq(reviewer_id))
            .filter(Column::Completed.eq(true))
            .filter(Column::TeacherReview.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询评审数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 新建或更新教师评审
    ///
    /// 已有教师评审时沿用其 ID，并整体替换勾选记录。
    pub async fn save_teacher_review_impl(
        &self,
        peerreview_id: i64,
        reviewee_id: i64,
        teacher_id: i64,
        comment: &str,
        checks: &[bool],
    ) -> Result<Review> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Reviews::find()
            .filter(Column::PeerreviewId.eq(peerreview_id))
            .filter(Column::RevieweeId.eq(reviewee_id))
            .filter(Column::TeacherReview.eq(true))
            .order_by_desc(Column::Id)
            .one(&txn)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询教师评审失败: {e}")))?;

        let saved = match existing {
            Some(review) => {
                let review_id = review.id;
                let model = ActiveModel {
                    id: Set(review_id),
                    reviewer_id: Set(teacher_id),
                    completed: Set(true),
                    comment: Set(comment.to_string()),
                    completed_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                let updated = model.update(&txn).await.map_err(|e| {
                    PeerReviewError::database_operation(format!("更新教师评审失败: {e}"))
                })?;

                ReviewCriteria::delete_many()
                    .filter(ReviewCriterionColumn::ReviewId.eq(review_id))
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        PeerReviewError::database_operation(format!("清除评审勾选记录失败: {e}"))
                    })?;

                updated
            }
            None => {
                let model = ActiveModel {
                    peerreview_id: Set(peerreview_id),
                    reviewer_id: Set(teacher_id),
                    reviewee_id: Set(reviewee_id),
                    completed: Set(true),
                    teacher_review: Set(true),
                    flagged: Set(false),
                    comment: Set(comment.to_string()),
                    allocated_at: Set(now),
                    downloaded_at: Set(now),
                    completed_at: Set(now),
                    first_viewed_at: Set(0),
                    last_viewed_at: Set(0),
                    view_count: Set(0),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(&txn).await.map_err(|e| {
                    PeerReviewError::database_operation(format!("创建教师评审失败: {e}"))
                })?
            }
        };

        if !checks.is_empty() {
            let rows = checks
                .iter()
                .enumerate()
                .map(|(position, checked)| ReviewCriterionActiveModel {
                    review_id: Set(saved.id),
                    criterion: Set(position as i32),
                    checked: Set(*checked),
                    ..Default::default()
                });

            ReviewCriteria::insert_many(rows)
                .exec(&txn)
                .await
                .map_err(|e| {
                    PeerReviewError::database_operation(format!("写入评审勾选记录失败: {e}"))
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(saved.into_review(CriterionChecks::from_ordered(checks)))
    }
}
