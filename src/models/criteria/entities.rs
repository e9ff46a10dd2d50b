use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 评分标准条目
///
/// `ordinal` 从 0 开始，评审的勾选记录按该序号关联，被引用后不可再变更。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "peerreview.ts")]
pub struct Criterion {
    pub id: i64,
    pub peerreview_id: i64,
    pub ordinal: i32,
    pub value: f64,
    // 提交前展示的说明
    pub text_before_review: String,
    // 评审时展示的说明
    pub text_at_review: String,
}
