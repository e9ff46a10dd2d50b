//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_peerreview_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PeerReviewError {
            $($variant(String),)*
        }

        impl PeerReviewError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PeerReviewError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PeerReviewError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PeerReviewError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PeerReviewError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PeerReviewError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_peerreview_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    DataIntegrity("E008", "Data Integrity Error"),
    Notification("E009", "Notification Error"),
}

impl PeerReviewError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PeerReviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PeerReviewError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PeerReviewError {
    fn from(err: sea_orm::DbErr) -> Self {
        PeerReviewError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PeerReviewError {
    fn from(err: serde_json::Error) -> Self {
        PeerReviewError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PeerReviewError {
    fn from(err: chrono::ParseError) -> Self {
        PeerReviewError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PeerReviewError>;
