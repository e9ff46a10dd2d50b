//! 配置管理
//!
//! `AppConfig` 为进程级配置；`ReviewThresholds` 为注入到统计与状态计算中的策略常量。

mod r#impl;
mod structs;

pub use structs::*;
