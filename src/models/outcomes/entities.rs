use serde::Serialize;
use ts_rs::TS;

/// 成绩计算结果
///
/// `Unresolved` 表示需要教师审核，不能当作 0 分处理。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export, export_to = "peerreview.ts")]
pub enum Mark {
    Resolved(f64),
    Unresolved,
}

/// 单份评审的质量评估
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "peerreview.ts")]
pub struct ReviewQuality {
    // 评审用时低于最短评审时间
    pub too_fast: bool,
    // 评语短于最短评语长度
    pub comment_too_short: bool,
}

impl ReviewQuality {
    pub fn is_hasty(&self) -> bool {
        self.too_fast || self.comment_too_short
    }
}
