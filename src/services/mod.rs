pub mod grading;
pub mod moderation;
pub mod notifications;
pub mod statistics;

pub use moderation::ModerationService;
pub use statistics::StatisticsService;

use actix_web::HttpResponse;

use crate::errors::PeerReviewError;
use crate::models::{ApiResponse, ErrorCode};

/// 将业务错误转换为 HTTP 响应
pub(crate) fn error_response(err: &PeerReviewError) -> HttpResponse {
    let code = ErrorCode::from(err);
    let body = ApiResponse::error_empty(code, err.message());
    match err {
        PeerReviewError::Validation(_) => HttpResponse::BadRequest().json(body),
        PeerReviewError::NotFound(_) => HttpResponse::NotFound().json(body),
        _ => {
            tracing::error!("{}", err.format_simple());
            HttpResponse::InternalServerError().json(body)
        }
    }
}
