//! 评审聚合核心：状态判定、成绩计算与评审质量评估
//!
//! 本模块不做任何 I/O，输入均为调用方已取出的记录快照。

pub mod mark;
pub mod quality;
pub mod status;

pub use mark::{compute_mark, find_override_review, resolved_checks};
pub use quality::{assess_review, reviewer_accuracy};
pub use status::resolve_status;
