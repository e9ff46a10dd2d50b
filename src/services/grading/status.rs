use tracing::debug;

use crate::models::reviews::entities::{Review, ReviewStatus};

/// 根据一组已完成评审判定提交状态
///
/// 教师评审一旦出现即为 `Overridden`，之后的评审不再扫描。
/// 冲突检测只比较相邻两份评审（外层按标准，内层按评审对）。
pub fn resolve_status(reviews: &[Review], number_of_criteria: usize) -> ReviewStatus {
    let mut flagged = false;
    let mut overridden = false;

    for review in reviews {
        flagged = flagged || review.flagged;
        if review.teacher_review {
            overridden = true;
            break;
        }
    }

    if overridden {
        return ReviewStatus::Overridden;
    }
    if reviews.len() < 2 {
        return ReviewStatus::LessThanTwoReviews;
    }

    let conflicting = (0..number_of_criteria).any(|position| {
        reviews
            .windows(2)
            .any(|pair| pair[0].checks.is_checked(position) != pair[1].checks.is_checked(position))
    });

    let status = match (flagged, conflicting) {
        (true, true) => ReviewStatus::FlaggedAndConflicting,
        (true, false) => ReviewStatus::Flagged,
        (false, true) => ReviewStatus::Conflicting,
        (false, false) => ReviewStatus::Consensus,
    };
    debug!(
        reviews = reviews.len(),
        flagged, conflicting, "resolved review status: {status}"
    );
    status
}
