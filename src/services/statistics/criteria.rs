use super::engine::StatisticsEngine;
use super::numeric::rate;
use crate::models::criteria::entities::Criterion;
use crate::models::reviews::entities::Review;
use crate::models::statistics::responses::CriterionStats;

impl StatisticsEngine {
    /// 每条标准被勾选的次数与比例（不受反馈下限影响）
    pub fn criteria_statistics(&self, criteria: &[Criterion], reviews: &[Review]) -> Vec<CriterionStats> {
        let peer_reviews: Vec<&Review> = Self::peer_reviews(reviews).collect();
        let number_of_reviews = peer_reviews.len() as f64;

        criteria
            .iter()
            .enumerate()
            .map(|(position, criterion)| {
                let count = peer_reviews
                    .iter()
                    .filter(|review| review.checks.is_checked(position))
                    .count() as i64;
                CriterionStats {
                    ordinal: criterion.ordinal,
                    count,
                    rate: rate(count as f64, number_of_reviews),
                    text_before_review: criterion.text_before_review.clone(),
                    text_at_review: criterion.text_at_review.clone(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::grading::fixtures::{criteria, gapped_criteria, review, teacher};

    #[test]
    fn test_checked_rates() {
        let criteria = criteria(&[1.0, 2.0, 3.0]);
        let reviews = vec![
            review(1, &[true, false, true]),
            review(2, &[true, true, false]),
            review(3, &[false, false, true]),
            review(4, &[true, false, true]),
            teacher(review(5, &[true, true, true])),
        ];
        let stats = StatisticsEngine::default().criteria_statistics(&criteria, &reviews);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[0].rate, 0.75);
        assert_eq!(stats[1].count, 1);
        assert_eq!(stats[1].rate, 0.25);
        assert_eq!(stats[2].count, 3);
        assert_eq!(stats[2].text_at_review, "check 2");
    }

    #[test]
    fn test_no_reviews_gives_zero_rates() {
        let criteria = criteria(&[1.0]);
        let stats = StatisticsEngine::default().criteria_statistics(&criteria, &[]);
        assert_eq!(stats[0].count, 0);
        assert_eq!(stats[0].rate, 0.0);
    }

    #[test]
    fn test_rates_use_catalog_position() {
        let criteria = gapped_criteria(&[1.0, 1.0]);
        let reviews = vec![review(1, &[false, true]), review(2, &[false, true])];
        let stats = StatisticsEngine::default().criteria_statistics(&criteria, &reviews);

        assert_eq!(stats[0].ordinal, 1);
        assert_eq!(stats[0].count, 0);
        assert_eq!(stats[1].ordinal, 3);
        assert_eq!(stats[1].count, 2);
        assert_eq!(stats[1].rate, 1.0);
    }
}
