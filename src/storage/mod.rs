use std::sync::Arc;

use crate::models::{
    criteria::entities::Criterion,
    notifications::{entities::Notification, requests::CreateNotificationRequest},
    peerreviews::entities::{Capability, PeerReview},
    reviews::entities::Review,
    submissions::entities::Submission,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 互评核心所需的外部数据源
///
/// 评审记录返回时已附带各标准的勾选结果。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 活动与评分标准
    // 通过ID获取活动
    async fn get_peerreview_by_id(&self, peerreview_id: i64) -> Result<Option<PeerReview>>;
    // 列出活动的评分标准（按序号排序）
    async fn list_criteria(&self, peerreview_id: i64) -> Result<Vec<Criterion>>;

    /// 提交
    // 列出活动的全部提交
    async fn list_submissions(&self, peerreview_id: i64) -> Result<Vec<Submission>>;
    // 获取用户在活动中的提交
    async fn get_submission_by_user(
        &self,
        peerreview_id: i64,
        user_id: i64,
    ) -> Result<Option<Submission>>;
    // 写入教师成绩
    async fn set_submission_mark(
        &self,
        submission_id: i64,
        grade: f64,
        teacher_id: i64,
        mailed: bool,
    ) -> Result<Option<Submission>>;
    // 更新成绩通知的送达状态
    async fn set_submission_mailed(&self, submission_id: i64, mailed: bool) -> Result<()>;

    /// 评审
    // 列出被评审人已完成的评审（按 ID 升序，包含教师评审）
    async fn list_reviews_of_reviewee(
        &self,
        peerreview_id: i64,
        reviewee_id: i64,
    ) -> Result<Vec<Review>>;
    // 列出活动中全部已完成的评审（包含教师评审）
    async fn list_completed_reviews(&self, peerreview_id: i64) -> Result<Vec<Review>>;
    // 统计已完成的教师评审数
    async fn count_moderations(&self, peerreview_id: i64) -> Result<i64>;
    // 统计某用户完成的同学评审数
    async fn count_reviews_completed_by(&self, peerreview_id: i64, reviewer_id: i64)
    -> Result<i64>;
    // 新建或更新被评审人的教师评审
    async fn save_teacher_review(
        &self,
        peerreview_id: i64,
        reviewee_id: i64,
        teacher_id: i64,
        comment: &str,
        checks: &[bool],
    ) -> Result<Review>;

    /// 参与者
    // 列出具有指定权限的用户
    async fn list_users_with_capability(
        &self,
        peerreview_id: i64,
        capability: Capability,
    ) -> Result<Vec<i64>>;

    /// 通知
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
