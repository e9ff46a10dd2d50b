//! 评审实体
//!
//! 时间字段以 Unix 秒存储，0 表示尚未发生。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "peerreview_reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub peerreview_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64,
    pub completed: bool,
    pub teacher_review: bool,
    pub flagged: bool,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub allocated_at: i64,
    pub downloaded_at: i64,
    pub completed_at: i64,
    pub first_viewed_at: i64,
    pub last_viewed_at: i64,
    pub view_count: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::peerreviews::Entity",
        from = "Column::PeerreviewId",
        to = "super::peerreviews::Column::Id"
    )]
    PeerReview,
    #[sea_orm(has_many = "super::review_criteria::Entity")]
    ReviewCriteria,
}

impl Related<super::peerreviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeerReview.def()
    }
}

impl Related<super::review_criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReviewCriteria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn optional_time(ts: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    if ts > 0 {
        chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0)
    } else {
        None
    }
}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_review(
        self,
        checks: crate::models::reviews::entities::CriterionChecks,
    ) -> crate::models::reviews::entities::Review {
        use crate::models::reviews::entities::Review;
        use chrono::{DateTime, Utc};

        Review {
            id: self.id,
            peerreview_id: self.peerreview_id,
            reviewer_id: self.reviewer_id,
            reviewee_id: self.reviewee_id,
            completed: self.completed,
            teacher_review: self.teacher_review,
            flagged: self.flagged,
            comment: self.comment,
            allocated_at: DateTime::<Utc>::from_timestamp(self.allocated_at, 0).unwrap_or_default(),
            downloaded_at: optional_time(self.downloaded_at),
            completed_at: optional_time(self.completed_at),
            first_viewed_at: optional_time(self.first_viewed_at),
            last_viewed_at: optional_time(self.last_viewed_at),
            view_count: self.view_count,
            checks,
        }
    }
}
