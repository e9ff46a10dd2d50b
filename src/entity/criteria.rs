//! 评分标准实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "peerreview_criteria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub peerreview_id: i64,
    pub ordinal: i32,
    pub value: f64,
    #[sea_orm(column_type = "Text")]
    pub text_before_review: String,
    #[sea_orm(column_type = "Text")]
    pub text_at_review: String,
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

impl Model {
    pub fn into_criterion(self) -> crate::models::criteria::entities::Criterion {
        crate::models::criteria::entities::Criterion {
            id: self.id,
            peerreview_id: self.peerreview_id,
            ordinal: self.ordinal,
            value: self.value,
            text_before_review: self.text_before_review,
            text_at_review: self.text_at_review,
        }
    }
}
