use tracing::warn;

use super::status::resolve_status;
use crate::errors::{PeerReviewError, Result};
use crate::models::criteria::entities::Criterion;
use crate::models::outcomes::entities::Mark;
use crate::models::reviews::entities::{CriterionChecks, Review, ReviewStatus};

/// 从末尾向前查找最后一份教师评审
pub fn find_override_review(reviews: &[Review]) -> Option<&Review> {
    reviews.iter().rev().find(|review| review.teacher_review)
}

/// 返回决定成绩的勾选结果
///
/// - `Overridden`：最后一份教师评审
/// - `Consensus`：第一份评审（共识下所有评审一致）
/// - 其他状态：`None`
pub fn resolved_checks(reviews: &[Review], status: ReviewStatus) -> Result<Option<&CriterionChecks>> {
    match status {
        ReviewStatus::Overridden => find_override_review(reviews)
            .map(|review| Some(&review.checks))
            .ok_or_else(|| {
                warn!("status is OVERRIDDEN but no teacher review exists in the record set");
                PeerReviewError::data_integrity("状态为教师覆盖，但评审记录中不存在教师评审")
            }),
        ReviewStatus::Consensus => Ok(reviews.first().map(|review| &review.checks)),
        _ => Ok(None),
    }
}

/// 计算被评审人的成绩
///
/// 结果 = 已勾选标准分值之和 + 被评审人完成的评审数 * 单份评审奖励。
/// 需要审核的状态返回 `Mark::Unresolved`。
pub fn compute_mark(
    reviews: &[Review],
    criteria: &[Criterion],
    reviews_completed_by_reviewee: i64,
    review_reward: f64,
) -> Result<Mark> {
    let status = resolve_status(reviews, criteria.len());
    if status.needs_moderation() {
        return Ok(Mark::Unresolved);
    }

    let criteria_sum = match resolved_checks(reviews, status)? {
        Some(checks) => criteria
            .iter()
            .enumerate()
            .filter(|(position, _)| checks.is_checked(*position))
            .map(|(_, criterion)| criterion.value)
            .sum(),
        None => 0.0,
    };

    Ok(Mark::Resolved(
        criteria_sum + reviews_completed_by_reviewee as f64 * review_reward,
    ))
}
