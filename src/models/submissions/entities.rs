use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学生提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct Submission {
    pub id: i64,
    pub peerreview_id: i64,
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 教师确认的最终成绩
    pub grade: Option<f64>,
    pub teacher_id: Option<i64>,
    pub marked_at: Option<chrono::DateTime<chrono::Utc>>,
    // 成绩通知是否已发送
    pub mailed: bool,
}
