//! 数据模型定义
//!
//! 业务实体与 API 请求/响应结构，与 `entity` 中的数据库行分离。

pub mod common;
pub mod criteria;
pub mod notifications;
pub mod outcomes;
pub mod peerreviews;
pub mod reviews;
pub mod statistics;
pub mod submissions;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
