use serde::Deserialize;
use ts_rs::TS;

/// 教师设置成绩
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SetMarkRequest {
    pub teacher_id: i64,
    pub grade: f64,
    // 通知中附带的跳转链接
    pub continue_url: Option<String>,
}
