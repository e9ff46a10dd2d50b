//! 预导入模块，方便使用

pub use super::criteria::{
    ActiveModel as CriterionActiveModel, Entity as Criteria, Model as CriterionModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::participants::{
    ActiveModel as ParticipantActiveModel, Entity as Participants, Model as ParticipantModel,
};
pub use super::peerreviews::{
    ActiveModel as PeerReviewActiveModel, Entity as PeerReviews, Model as PeerReviewModel,
};
pub use super::review_criteria::{
    ActiveModel as ReviewCriterionActiveModel, Entity as ReviewCriteria,
    Model as ReviewCriterionModel,
};
pub use super::reviews::{ActiveModel as ReviewActiveModel, Entity as Reviews, Model as ReviewModel};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
