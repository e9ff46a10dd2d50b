//! 活动参与者实体（提交/评分权限）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "peerreview_participants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub peerreview_id: i64,
    pub user_id: i64,
    pub can_submit: bool,
    pub can_grade: bool,
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
