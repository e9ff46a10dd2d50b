//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{PeerReviewError, Result};
use crate::models::submissions::entities::Submission;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出活动的全部提交
    pub async fn list_submissions_impl(&self, peerreview_id: i64) -> Result<Vec<Submission>> {
        let submissions = Submissions::find()
            .filter(Column::PeerreviewId.eq(peerreview_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(submissions.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 获取用户在活动中的提交
    pub async fn get_submission_by_user_impl(
        &self,
        peerreview_id: i64,
        user_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::PeerreviewId.eq(peerreview_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 写入教师成绩
    pub async fn set_submission_mark_impl(
        &self,
        submission_id: i64,
        grade: f64,
        teacher_id: i64,
        mailed: bool,
    ) -> Result<Option<Submission>> {
        let existing = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("查询提交失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(submission_id),
            grade: Set(Some(grade)),
            teacher_id: Set(Some(teacher_id)),
            marked_at: Set(Some(now)),
            mailed: Set(mailed),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("更新成绩失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }

    /// 更新成绩通知的送达状态
    pub async fn set_submission_mailed_impl(&self, submission_id: i64, mailed: bool) -> Result<()> {
        let model = ActiveModel {
            id: Set(submission_id),
            mailed: Set(mailed),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("更新通知状态失败: {e}")))?;

        Ok(())
    }
}
