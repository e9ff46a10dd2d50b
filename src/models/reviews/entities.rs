use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 每条评分标准的勾选情况
///
/// 以标准在目录中的位置（按序号排序后的下标，从 0 开始）为键，与序号的取值无关。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionChecks(BTreeMap<usize, bool>);

impl CriterionChecks {
    /// 按顺序从布尔列表构造，第 i 项对应位置 i
    pub fn from_ordered(checks: &[bool]) -> Self {
        Self(checks.iter().copied().enumerate().collect())
    }

    pub fn set(&mut self, position: usize, checked: bool) {
        self.0.insert(position, checked);
    }

    /// 缺失的位置视为未勾选
    pub fn is_checked(&self, position: usize) -> bool {
        self.0.get(&position).copied().unwrap_or(false)
    }
}

/// 一份评审记录（活动、评审人、被评审人三元组）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub peerreview_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64,
    pub completed: bool,
    // 教师评审，覆盖同学评审结果
    pub teacher_review: bool,
    pub flagged: bool,
    pub comment: String,
    pub allocated_at: DateTime<Utc>,
    pub downloaded_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub first_viewed_at: Option<DateTime<Utc>>,
    pub last_viewed_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub checks: CriterionChecks,
}

fn timestamp_or_zero(time: Option<DateTime<Utc>>) -> i64 {
    time.map(|t| t.timestamp()).unwrap_or(0)
}

impl Review {
    /// 评审耗时（秒）：完成时间减去下载时间，缺失的时间按 0 计
    pub fn review_seconds(&self) -> i64 {
        timestamp_or_zero(self.completed_at) - timestamp_or_zero(self.downloaded_at)
    }

    /// 评语长度（字符）
    pub fn comment_length(&self) -> i64 {
        self.comment.chars().count() as i64
    }

    /// 评审完成到被评审人首次查看之间的秒数，未查看时为 None
    pub fn seconds_until_viewed(&self) -> Option<i64> {
        self.first_viewed_at
            .map(|viewed| viewed.timestamp() - timestamp_or_zero(self.completed_at))
    }
}

/// 提交的评审状态
///
/// 数值按严重程度排序，<= 3 需要教师审核，>= 4 表示已有结论。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "peerreview.ts")]
#[repr(i32)]
pub enum ReviewStatus {
    Flagged = 0,
    Conflicting = 1,
    FlaggedAndConflicting = 2,
    LessThanTwoReviews = 3,
    Consensus = 4,
    Overridden = 5,
}

impl ReviewStatus {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn needs_moderation(self) -> bool {
        self.code() <= ReviewStatus::LessThanTwoReviews.code()
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReviewStatus::Flagged => "FLAGGED",
            ReviewStatus::Conflicting => "CONFLICTING",
            ReviewStatus::FlaggedAndConflicting => "FLAGGED_AND_CONFLICTING",
            ReviewStatus::LessThanTwoReviews => "LESS_THAN_TWO_REVIEWS",
            ReviewStatus::Consensus => "CONSENSUS",
            ReviewStatus::Overridden => "OVERRIDDEN",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_and_moderation() {
        assert_eq!(ReviewStatus::Flagged.code(), 0);
        assert_eq!(ReviewStatus::Overridden.code(), 5);
        assert!(ReviewStatus::LessThanTwoReviews.needs_moderation());
        assert!(!ReviewStatus::Consensus.needs_moderation());
        assert!(ReviewStatus::FlaggedAndConflicting.needs_moderation());
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&ReviewStatus::LessThanTwoReviews).unwrap();
        assert_eq!(json, "\"LESS_THAN_TWO_REVIEWS\"");
        assert_eq!(
            ReviewStatus::FlaggedAndConflicting.to_string(),
            "FLAGGED_AND_CONFLICTING"
        );
    }

    #[test]
    fn test_missing_check_is_unchecked() {
        let checks = CriterionChecks::from_ordered(&[true, false]);
        assert!(checks.is_checked(0));
        assert!(!checks.is_checked(1));
        assert!(!checks.is_checked(7));
    }

    #[test]
    fn test_comment_length_counts_chars_not_bytes() {
        let mut review = crate::services::grading::fixtures::review(1, &[true]);

        review.comment = "好评！".into();
        assert_eq!(review.comment.len(), 9);
        assert_eq!(review.comment_length(), 3);

        review.comment = "naïve 👍".into();
        assert_eq!(review.comment.len(), 11);
        assert_eq!(review.comment_length(), 7);
    }
}
