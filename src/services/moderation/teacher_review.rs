use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ModerationService, load_outcome};
use crate::config::AppConfig;
use crate::models::reviews::requests::TeacherReviewRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::utils::validate_teacher_checks;

pub async fn save_teacher_review(
    service: &ModerationService,
    request: &HttpRequest,
    peerreview_id: i64,
    reviewee_id: i64,
    req: TeacherReviewRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let peerreview = match storage.get_peerreview_by_id(peerreview_id).await {
        Ok(Some(peerreview)) => peerreview,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PeerReviewNotFound,
                "互评活动不存在",
            )));
        }
        Err(e) => return Ok(error_response(&e)),
    };

    let criteria = match storage.list_criteria(peerreview_id).await {
        Ok(criteria) => criteria,
        Err(e) => return Ok(error_response(&e)),
    };

    if let Err(e) = validate_teacher_checks(&req.checks, criteria.len()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TeacherReviewInvalid,
            e.message(),
        )));
    }

    let review = match storage
        .save_teacher_review(
            peerreview_id,
            reviewee_id,
            req.teacher_id,
            &req.comment,
            &req.checks,
        )
        .await
    {
        Ok(review) => review,
        Err(e) => return Ok(error_response(&e)),
    };

    info!(
        "教师 {} 保存了对用户 {} 的评审 (活动 {}, 评审 {})",
        req.teacher_id, reviewee_id, peerreview_id, review.id
    );

    let thresholds = &AppConfig::get().thresholds;
    match load_outcome(storage.as_ref(), &peerreview, reviewee_id, thresholds).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ApiResponse::success(outcome, "教师评审已保存"))),
        Err(e) => Ok(error_response(&e)),
    }
}
