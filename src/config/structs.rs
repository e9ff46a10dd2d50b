use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub thresholds: ReviewThresholds,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub max_age: usize,
}

/// 互评策略阈值
///
/// 在构造时注入统计引擎与建议生成器，计算过程中不读取全局状态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewThresholds {
    /// 少于该数量的评审不计算派生统计
    pub review_feedback_min: usize,
    pub acceptable_review_rate: f64,
    pub acceptable_review_attention_rate: f64,
    pub acceptable_moderation_rate: f64,
    /// 秒
    pub acceptable_review_time: i64,
    /// 字符
    pub acceptable_comment_length: usize,
    pub acceptable_flag_rate: f64,
    pub acceptable_checked_rate: f64,
    /// 秒
    pub minimal_review_time: i64,
    /// 字符
    pub minimal_review_comment_length: usize,
    pub accuracy_required: f64,
}

impl Default for ReviewThresholds {
    fn default() -> Self {
        Self {
            review_feedback_min: 10,
            acceptable_review_rate: 0.9,
            acceptable_review_attention_rate: 0.9,
            acceptable_moderation_rate: 0.6,
            acceptable_review_time: 60,
            acceptable_comment_length: 50,
            acceptable_flag_rate: 0.1,
            acceptable_checked_rate: 0.5,
            minimal_review_time: 30,
            minimal_review_comment_length: 12,
            accuracy_required: 0.7,
        }
    }
}
