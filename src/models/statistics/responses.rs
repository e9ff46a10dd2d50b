use serde::Serialize;
use ts_rs::TS;

/// 评审统计
///
/// 时间单位为秒，长度单位为字符。评审数未达到反馈下限时，除计数与审核率外均为 0。
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "statistics.ts")]
pub struct ReviewStats {
    pub number_of_submissions: i64,
    pub number_of_reviews: i64,
    pub meets_feedback_minimum: bool,
    pub review_rate: f64,
    pub number_of_moderations: i64,
    pub moderation_rate: f64,
    pub total_review_time: i64,
    pub average_review_time: f64,
    pub normalised_average_review_time: f64,
    pub std_dev_review_time: f64,
    pub min_review_time: i64,
    pub max_review_time: i64,
    pub review_time_outlier_lower_boundary: f64,
    pub review_time_outlier_upper_boundary: f64,
    pub total_comment_length: i64,
    pub average_comment_length: f64,
    pub normalised_average_comment_length: f64,
    pub std_dev_comment_length: f64,
    pub min_comment_length: i64,
    pub max_comment_length: i64,
    pub comment_length_outlier_lower_boundary: f64,
    pub comment_length_outlier_upper_boundary: f64,
    pub flags: i64,
    pub flag_rate: f64,
    pub number_of_reviews_viewed: i64,
    pub review_attention_rate: f64,
    pub number_of_review_views: i64,
    pub average_view_rate: f64,
    pub total_period_between_review_and_view: i64,
    pub average_period_between_review_and_view: f64,
    pub median_period_between_review_and_view: i64,
}

/// 单条评分标准的勾选统计
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "statistics.ts")]
pub struct CriterionStats {
    pub ordinal: i32,
    pub count: i64,
    pub rate: f64,
    pub text_before_review: String,
    pub text_at_review: String,
}

/// 提交统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "statistics.ts")]
pub struct SubmissionStats {
    pub number_of_students: i64,
    pub number_of_submissions: i64,
    pub submission_rate: f64,
    pub number_of_submissions_with_feedback: i64,
    pub total_wait_for_feedback: i64,
    pub average_wait_for_feedback: f64,
    pub median_wait_for_feedback: i64,
}

/// 统计建议（仅数据，由前端本地化展示）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "statistics.ts")]
pub enum Advice {
    BelowFeedbackMinimum { minimum: i64 },
    LowReviewRate,
    ShortReviewTime,
    ShortComments,
    HighFlagRate,
    LowReviewAttention,
    HighModerationRate,
    LowCheckedRate { ordinal: i32 },
}

/// 活动的完整统计报告
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "statistics.ts")]
pub struct StatisticsReport {
    pub peerreview_id: i64,
    pub submissions: SubmissionStats,
    pub reviews: ReviewStats,
    pub criteria: Vec<CriterionStats>,
    pub advice: Vec<Advice>,
}
