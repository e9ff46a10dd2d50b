use super::engine::StatisticsEngine;
use crate::models::statistics::responses::{Advice, CriterionStats, ReviewStats};

impl StatisticsEngine {
    /// 根据阈值生成统计建议
    pub fn advice(&self, reviews: &ReviewStats, criteria: &[CriterionStats]) -> Vec<Advice> {
        let thresholds = self.thresholds();
        let mut advice = Vec::new();

        if reviews.meets_feedback_minimum {
            if reviews.review_rate < thresholds.acceptable_review_rate {
                advice.push(Advice::LowReviewRate);
            }
            if reviews.normalised_average_review_time < thresholds.acceptable_review_time as f64 {
                advice.push(Advice::ShortReviewTime);
            }
            if reviews.normalised_average_comment_length
                < thresholds.acceptable_comment_length as f64
            {
                advice.push(Advice::ShortComments);
            }
            if reviews.flag_rate > thresholds.acceptable_flag_rate {
                advice.push(Advice::HighFlagRate);
            }
            if reviews.review_attention_rate < thresholds.acceptable_review_attention_rate {
                advice.push(Advice::LowReviewAttention);
            }
        } else {
            advice.push(Advice::BelowFeedbackMinimum {
                minimum: thresholds.review_feedback_min as i64,
            });
        }

        if reviews.moderation_rate > thresholds.acceptable_moderation_rate {
            advice.push(Advice::HighModerationRate);
        }

        advice.extend(
            criteria
                .iter()
                .filter(|criterion| criterion.rate < thresholds.acceptable_checked_rate)
                .map(|criterion| Advice::LowCheckedRate {
                    ordinal: criterion.ordinal,
                }),
        );

        advice
    }
}
