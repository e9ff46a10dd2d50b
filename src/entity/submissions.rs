//! 提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "peerreview_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub peerreview_id: i64,
    pub user_id: i64,
    pub created_at: i64,
    pub grade: Option<f64>,
    pub teacher_id: Option<i64>,
    pub marked_at: Option<i64>,
    pub mailed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::peerreviews::Entity",
        from = "Column::PeerreviewId",
        to = "super::peerreviews::Column::Id"
    )]
    PeerReview,
}

impl Related<super::peerreviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeerReview.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::Submission;
        use chrono::{DateTime, Utc};

        Submission {
            id: self.id,
            peerreview_id: self.peerreview_id,
            user_id: self.user_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            grade: self.grade,
            teacher_id: self.teacher_id,
            marked_at: self
                .marked_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            mailed: self.mailed,
        }
    }
}
