use crate::config::ReviewThresholds;
use crate::models::reviews::entities::Review;

/// 活动统计引擎
///
/// 阈值在构造时注入；各项统计在 `reviews`、`criteria`、`submissions`、`advice` 中实现。
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    thresholds: ReviewThresholds,
}

impl StatisticsEngine {
    pub fn new(thresholds: ReviewThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ReviewThresholds {
        &self.thresholds
    }

    /// 已完成的同学评审（排除教师评审）
    pub(crate) fn peer_reviews(reviews: &[Review]) -> impl Iterator<Item = &Review> {
        reviews
            .iter()
            .filter(|review| review.completed && !review.teacher_review)
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new(ReviewThresholds::default())
    }
}
