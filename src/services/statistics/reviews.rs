use tracing::debug;

use super::engine::StatisticsEngine;
use super::numeric::{
    OutlierFences, QuartileBounds, mean, population_std_dev, rate, upper_median,
};
use crate::models::reviews::entities::Review;
use crate::models::statistics::responses::ReviewStats;

impl StatisticsEngine {
    /// 计算评审统计
    ///
    /// `reviews` 可包含教师评审与未完成评审，计算前会被过滤掉。
    /// 审核率不受反馈下限影响，其余派生值仅在评审数达到下限时计算。
    pub fn review_statistics(
        &self,
        reviews: &[Review],
        number_of_submissions: i64,
        number_of_moderations: i64,
    ) -> ReviewStats {
        let peer_reviews: Vec<&Review> = Self::peer_reviews(reviews).collect();
        let number_of_reviews = peer_reviews.len() as i64;

        let mut stats = ReviewStats {
            number_of_submissions,
            number_of_reviews,
            number_of_moderations,
            moderation_rate: rate(number_of_moderations as f64, number_of_submissions as f64),
            ..Default::default()
        };

        let minimum = self.thresholds().review_feedback_min;
        if peer_reviews.is_empty() || peer_reviews.len() < minimum {
            debug!(
                number_of_reviews,
                minimum, "below review feedback minimum, skipping derived statistics"
            );
            return stats;
        }
        stats.meets_feedback_minimum = true;
        stats.review_rate = rate(number_of_reviews as f64 / 2.0, number_of_submissions as f64);

        let mut review_times = Vec::with_capacity(peer_reviews.len());
        let mut comment_lengths = Vec::with_capacity(peer_reviews.len());
        let mut wait_times = Vec::new();

        for review in &peer_reviews {
            let review_time = review.review_seconds();
            review_times.push(review_time);

            let comment_length = review.comment_length();
            comment_lengths.push(comment_length);

            if review.flagged {
                stats.flags += 1;
            }

            if let Some(wait_time) = review.seconds_until_viewed() {
                stats.number_of_reviews_viewed += 1;
                stats.number_of_review_views += review.view_count;
                stats.total_period_between_review_and_view += wait_time;
                wait_times.push(wait_time);
            }
        }

        stats.total_review_time = review_times.iter().sum();
        stats.total_comment_length = comment_lengths.iter().sum();
        stats.average_review_time = mean(&review_times);
        stats.average_comment_length = mean(&comment_lengths);
        stats.std_dev_review_time = population_std_dev(&review_times, stats.average_review_time);
        stats.std_dev_comment_length =
            population_std_dev(&comment_lengths, stats.average_comment_length);

        review_times.sort_unstable();
        comment_lengths.sort_unstable();
        wait_times.sort_unstable();

        stats.min_review_time = review_times.first().copied().unwrap_or(0);
        stats.max_review_time = review_times.last().copied().unwrap_or(0);
        stats.min_comment_length = comment_lengths.first().copied().unwrap_or(0);
        stats.max_comment_length = comment_lengths.last().copied().unwrap_or(0);

        if let (Some(time_quartiles), Some(length_quartiles)) = (
            QuartileBounds::from_sorted(&review_times),
            QuartileBounds::from_sorted(&comment_lengths),
        ) {
            // 评语长度的边界沿用评审耗时的四分位距
            let time_distance = time_quartiles.interquartile_distance();
            let time_fences = OutlierFences::tukey(time_quartiles, time_distance);
            let length_fences = OutlierFences::tukey(length_quartiles, time_distance);

            stats.review_time_outlier_lower_boundary = time_fences.lower;
            stats.review_time_outlier_upper_boundary = time_fences.upper;
            stats.comment_length_outlier_lower_boundary = length_fences.lower;
            stats.comment_length_outlier_upper_boundary = length_fences.upper;

            let normalised_times = time_fences.trim(&review_times);
            let normalised_lengths = length_fences.trim(&comment_lengths);
            stats.normalised_average_review_time = mean(normalised_times);
            stats.normalised_average_comment_length = mean(normalised_lengths);
            debug!(
                trimmed_review_times = review_times.len() - normalised_times.len(),
                trimmed_comment_lengths = comment_lengths.len() - normalised_lengths.len(),
                "outliers removed before normalised averages"
            );
        }

        stats.flag_rate = rate(stats.flags as f64, number_of_reviews as f64);
        stats.review_attention_rate =
            rate(stats.number_of_reviews_viewed as f64, number_of_reviews as f64);
        stats.average_view_rate =
            rate(stats.number_of_review_views as f64, number_of_reviews as f64);
        if stats.number_of_reviews_viewed > 0 {
            stats.average_period_between_review_and_view = rate(
                stats.total_period_between_review_and_view as f64,
                number_of_reviews as f64,
            );
            stats.median_period_between_review_and_view = upper_median(&wait_times).unwrap_or(0);
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReviewThresholds;
    use crate::services::grading::fixtures::{at, review, teacher};

    fn timed_review(id: i64, seconds: i64, comment: &str) -> Review {
        let mut review = review(id, &[true]);
        review.downloaded_at = at(10_000);
        review.completed_at = at(10_000 + seconds);
        review.comment = comment.to_string();
        review
    }

    fn engine_with_minimum(minimum: usize) -> StatisticsEngine {
        StatisticsEngine::new(ReviewThresholds {
            review_feedback_min: minimum,
            ..Default::default()
        })
    }

    #[test]
    fn test_below_feedback_minimum_returns_zeroed_stats() {
        let reviews: Vec<Review> = (1..=9).map(|i| timed_review(i, 60, "fine")).collect();
        let stats = StatisticsEngine::default().review_statistics(&reviews, 5, 3);

        assert_eq!(stats.number_of_reviews, 9);
        assert!(!stats.meets_feedback_minimum);
        assert_eq!(stats.min_review_time, 0);
        assert_eq!(stats.min_comment_length, 0);
        assert_eq!(stats.review_rate, 0.0);
        assert_eq!(stats.average_review_time, 0.0);
        // 审核率不受下限影响
        assert!((stats.moderation_rate - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_review_time_trimming_and_averages() {
        let reviews = vec![
            timed_review(1, 10, "a"),
            timed_review(2, 20, "bb"),
            timed_review(3, 30, "ccc"),
            timed_review(4, 40, "dddd"),
            timed_review(5, 1000, "eeeee"),
        ];
        let stats = engine_with_minimum(5).review_statistics(&reviews, 0, 0);

        assert!(stats.meets_feedback_minimum);
        assert_eq!(stats.total_review_time, 1100);
        assert_eq!(stats.min_review_time, 10);
        assert_eq!(stats.max_review_time, 1000);
        assert_eq!(stats.review_time_outlier_lower_boundary, -10.0);
        assert_eq!(stats.review_time_outlier_upper_boundary, 70.0);
        assert_eq!(stats.normalised_average_review_time, 25.0);
        assert_eq!(stats.average_review_time, 220.0);
        // 没有提交时比率为 0
        assert_eq!(stats.review_rate, 0.0);
        assert_eq!(stats.moderation_rate, 0.0);
    }

    #[test]
    fn test_comment_fences_reuse_review_time_distance() {
        let reviews = vec![
            timed_review(1, 10, "a"),
            timed_review(2, 20, "bb"),
            timed_review(3, 30, "ccc"),
            timed_review(4, 40, "dddd"),
            timed_review(5, 1000, "eeeee"),
        ];
        let stats = engine_with_minimum(5).review_statistics(&reviews, 0, 0);

        // 评语长度四分位为 2 与 4，四分位距取评审耗时的 20
        assert_eq!(stats.comment_length_outlier_lower_boundary, 2.0 - 30.0);
        assert_eq!(stats.comment_length_outlier_upper_boundary, 4.0 + 30.0);
        assert_eq!(stats.normalised_average_comment_length, 3.0);
    }

    #[test]
    fn test_rates_and_view_statistics() {
        let mut reviews: Vec<Review> = (1..=20)
            .map(|i| timed_review(i, 100, "a thoughtful comment"))
            .collect();
        reviews[0].flagged = true;
        reviews[1].flagged = true;
        for (review, wait) in reviews.iter_mut().zip([5, 25, 15]) {
            review.first_viewed_at = at(10_100 + wait);
            review.view_count = 2;
        }
        // 教师评审不参与统计
        reviews.push(teacher(timed_review(99, 5, "")));

        let stats = StatisticsEngine::default().review_statistics(&reviews, 10, 0);
        assert_eq!(stats.number_of_reviews, 20);
        assert_eq!(stats.review_rate, 1.0);
        assert!((stats.flag_rate - 0.1).abs() < 1e-9);
        assert_eq!(stats.number_of_reviews_viewed, 3);
        assert_eq!(stats.number_of_review_views, 6);
        assert!((stats.review_attention_rate - 0.15).abs() < 1e-9);
        assert!((stats.average_view_rate - 0.3).abs() < 1e-9);
        assert_eq!(stats.total_period_between_review_and_view, 45);
        assert_eq!(stats.median_period_between_review_and_view, 15);
        assert_eq!(stats.std_dev_review_time, 0.0);
    }

    #[test]
    fn test_population_std_dev_over_full_set() {
        let reviews = vec![
            timed_review(1, 10, "x"),
            timed_review(2, 20, "x"),
            timed_review(3, 30, "x"),
        ];
        let stats = engine_with_minimum(3).review_statistics(&reviews, 3, 0);
        assert!((stats.std_dev_review_time - (200.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert_eq!(stats.std_dev_comment_length, 0.0);
    }

    #[test]
    fn test_zero_minimum_with_no_reviews() {
        let stats = engine_with_minimum(0).review_statistics(&[], 4, 0);
        assert!(!stats.meets_feedback_minimum);
        assert_eq!(stats.number_of_reviews, 0);
        assert_eq!(stats.flag_rate, 0.0);
    }
}
