use serde::Serialize;
use ts_rs::TS;

use super::entities::{Mark, ReviewQuality};
use crate::models::reviews::entities::ReviewStatus;

/// 单份同学评审的评估
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "peerreview.ts")]
pub struct ReviewAssessment {
    pub review_id: i64,
    pub reviewer_id: i64,
    pub flagged: bool,
    pub quality: ReviewQuality,
    // 与最终结论一致的标准占比，结论未确定时为空
    pub accuracy: Option<f64>,
    pub accurate: Option<bool>,
}

/// 被评审人的评审结论
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "peerreview.ts")]
pub struct RevieweeOutcomeResponse {
    pub peerreview_id: i64,
    pub reviewee_id: i64,
    pub status: ReviewStatus,
    pub status_code: i32,
    pub needs_moderation: bool,
    pub number_of_reviews: i64,
    pub reviews_completed_by_reviewee: i64,
    pub mark: Mark,
    pub assessments: Vec<ReviewAssessment>,
}
