use crate::config::ReviewThresholds;
use crate::models::criteria::entities::Criterion;
use crate::models::outcomes::entities::ReviewQuality;
use crate::models::reviews::entities::{CriterionChecks, Review};

pub fn assess_review(review: &Review, thresholds: &ReviewThresholds) -> ReviewQuality {
    ReviewQuality {
        too_fast: review.review_seconds() < thresholds.minimal_review_time,
        comment_too_short: review.comment_length()
            < thresholds.minimal_review_comment_length as i64,
    }
}

/// 评审与最终结论一致的标准占比；没有标准时为 0
pub fn reviewer_accuracy(review: &Review, resolved: &CriterionChecks, criteria: &[Criterion]) -> f64 {
    if criteria.is_empty() {
        return 0.0;
    }
    let agreeing = (0..criteria.len())
        .filter(|&position| review.checks.is_checked(position) == resolved.is_checked(position))
        .count();
    agreeing as f64 / criteria.len() as f64
}
