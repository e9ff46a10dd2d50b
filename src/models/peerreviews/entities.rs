use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 互评活动
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "peerreview.ts")]
pub struct PeerReview {
    // 唯一 ID
    pub id: i64,
    // 活动名称
    pub name: String,
    // 每完成一份评审奖励的分数
    pub review_reward: f64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 参与者权限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    // 可以提交作业
    Submit,
    // 可以评分（教师）
    Grade,
}
