use serde::Deserialize;
use ts_rs::TS;

/// 教师审核评审（新建或更新）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "peerreview.ts")]
pub struct TeacherReviewRequest {
    pub teacher_id: i64,
    #[serde(default)]
    pub comment: String,
    // 按标准序号排列，长度必须与标准数量一致
    pub checks: Vec<bool>,
}
