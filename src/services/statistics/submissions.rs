use std::collections::{HashMap, HashSet};

use super::engine::StatisticsEngine;
use super::numeric::{rate, upper_median};
use crate::models::reviews::entities::Review;
use crate::models::statistics::responses::SubmissionStats;
use crate::models::submissions::entities::Submission;

impl StatisticsEngine {
    /// 计算提交统计
    ///
    /// 学生数 = 具有提交权限的用户 - 具有评分权限的用户。
    /// 等待反馈时间 = 被评审人最近一份已完成同学评审的完成时间 - 提交时间。
    pub fn submission_statistics(
        &self,
        submissions: &[Submission],
        reviews: &[Review],
        submitters: &HashSet<i64>,
        graders: &HashSet<i64>,
    ) -> SubmissionStats {
        let number_of_students = submitters.difference(graders).count() as i64;
        let number_of_submissions = submissions.len() as i64;

        // 每个被评审人最近一次完成评审的时间
        let mut latest_feedback: HashMap<i64, i64> = HashMap::new();
        for review in Self::peer_reviews(reviews) {
            let Some(completed_at) = review.completed_at else {
                continue;
            };
            let completed_at = completed_at.timestamp();
            latest_feedback
                .entry(review.reviewee_id)
                .and_modify(|latest| *latest = (*latest).max(completed_at))
                .or_insert(completed_at);
        }

        let mut seen_users = HashSet::new();
        let mut wait_times: Vec<i64> = submissions
            .iter()
            .filter(|submission| seen_users.insert(submission.user_id))
            .filter_map(|submission| {
                latest_feedback
                    .get(&submission.user_id)
                    .map(|&completed_at| completed_at - submission.created_at.timestamp())
            })
            .collect();
        wait_times.sort_unstable();

        let total_wait_for_feedback: i64 = wait_times.iter().sum();
        SubmissionStats {
            number_of_students,
            number_of_submissions,
            submission_rate: rate(number_of_submissions as f64, number_of_students as f64),
            number_of_submissions_with_feedback: wait_times.len() as i64,
            total_wait_for_feedback,
            average_wait_for_feedback: rate(total_wait_for_feedback as f64, wait_times.len() as f64),
            median_wait_for_feedback: upper_median(&wait_times).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::services::grading::fixtures::{at, review, teacher};

    fn submission(user_id: i64, created_at: i64) -> Submission {
        Submission {
            id: user_id,
            peerreview_id: 1,
            user_id,
            created_at: DateTime::<Utc>::from_timestamp(created_at, 0).unwrap_or_default(),
            grade: None,
            teacher_id: None,
            marked_at: None,
            mailed: false,
        }
    }

    fn completed_for(id: i64, reviewee_id: i64, completed_at: i64) -> Review {
        let mut review = review(id, &[true]);
        review.reviewee_id = reviewee_id;
        review.completed_at = at(completed_at);
        review
    }

    #[test]
    fn test_students_exclude_graders() {
        let submitters: HashSet<i64> = [1, 2, 3, 4, 90].into_iter().collect();
        let graders: HashSet<i64> = [90, 91].into_iter().collect();
        let submissions = vec![submission(1, 0), submission(2, 0)];

        let stats = StatisticsEngine::default().submission_statistics(
            &submissions,
            &[],
            &submitters,
            &graders,
        );
        assert_eq!(stats.number_of_students, 4);
        assert_eq!(stats.number_of_submissions, 2);
        assert_eq!(stats.submission_rate, 0.5);
        assert_eq!(stats.number_of_submissions_with_feedback, 0);
        assert_eq!(stats.average_wait_for_feedback, 0.0);
    }

    #[test]
    fn test_no_students_gives_zero_rate() {
        let stats = StatisticsEngine::default().submission_statistics(
            &[submission(1, 0)],
            &[],
            &HashSet::new(),
            &HashSet::new(),
        );
        assert_eq!(stats.submission_rate, 0.0);
    }

    #[test]
    fn test_wait_for_feedback_uses_latest_peer_review() {
        let submissions = vec![submission(1, 1_000), submission(2, 2_000), submission(3, 3_000)];
        let reviews = vec![
            completed_for(1, 1, 1_100),
            completed_for(2, 1, 1_500),
            completed_for(3, 2, 2_050),
            completed_for(4, 3, 3_300),
            // 教师评审不算作反馈
            teacher(completed_for(5, 3, 9_000)),
        ];

        let stats = StatisticsEngine::default().submission_statistics(
            &submissions,
            &reviews,
            &HashSet::new(),
            &HashSet::new(),
        );
        assert_eq!(stats.number_of_submissions_with_feedback, 3);
        assert_eq!(stats.total_wait_for_feedback, 500 + 50 + 300);
        assert!((stats.average_wait_for_feedback - 850.0 / 3.0).abs() < 1e-9);
        // 排序后 [50, 300, 500]，取下标 1
        assert_eq!(stats.median_wait_for_feedback, 300);
    }
}
