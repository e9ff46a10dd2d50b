use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::ModerationService;
use crate::config::{AppConfig, ReviewThresholds};
use crate::errors::{PeerReviewError, Result};
use crate::models::criteria::entities::Criterion;
use crate::models::outcomes::responses::{ReviewAssessment, RevieweeOutcomeResponse};
use crate::models::peerreviews::entities::PeerReview;
use crate::models::reviews::entities::Review;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::services::grading::{
    assess_review, compute_mark, reviewer_accuracy, resolve_status, resolved_checks,
};
use crate::storage::Storage;

/// 根据评审记录集得出被评审人的结论
///
/// `number_of_reviews` 只统计已完成的同学评审。
pub fn evaluate_outcome(
    peerreview: &PeerReview,
    reviewee_id: i64,
    reviews: &[Review],
    criteria: &[Criterion],
    reviews_completed_by_reviewee: i64,
    thresholds: &ReviewThresholds,
) -> Result<RevieweeOutcomeResponse> {
    let status = resolve_status(reviews, criteria.len());
    let mark = compute_mark(
        reviews,
        criteria,
        reviews_completed_by_reviewee,
        peerreview.review_reward,
    )?;
    let resolved = if status.needs_moderation() {
        None
    } else {
        resolved_checks(reviews, status)?
    };

    let assessments: Vec<ReviewAssessment> = reviews
        .iter()
        .filter(|review| review.completed && !review.teacher_review)
        .map(|review| {
            let accuracy = resolved.map(|checks| reviewer_accuracy(review, checks, criteria));
            ReviewAssessment {
                review_id: review.id,
                reviewer_id: review.reviewer_id,
                flagged: review.flagged,
                quality: assess_review(review, thresholds),
                accuracy,
                accurate: accuracy.map(|value| value >= thresholds.accuracy_required),
            }
        })
        .collect();

    Ok(RevieweeOutcomeResponse {
        peerreview_id: peerreview.id,
        reviewee_id,
        status,
        status_code: status.code(),
        needs_moderation: status.needs_moderation(),
        number_of_reviews: assessments.len() as i64,
        reviews_completed_by_reviewee,
        mark,
        assessments,
    })
}

/// 读取评审记录并计算结论
pub async fn load_outcome(
    storage: &dyn Storage,
    peerreview: &PeerReview,
    reviewee_id: i64,
    thresholds: &ReviewThresholds,
) -> Result<RevieweeOutcomeResponse> {
    let criteria = storage.list_criteria(peerreview.id).await?;
    let reviews = storage
        .list_reviews_of_reviewee(peerreview.id, reviewee_id)
        .await?;
    let completed_by_reviewee = storage
        .count_reviews_completed_by(peerreview.id, reviewee_id)
        .await?;

    evaluate_outcome(
        peerreview,
        reviewee_id,
        &reviews,
        &criteria,
        completed_by_reviewee,
        thresholds,
    )
    .inspect_err(|e| {
        if matches!(e, PeerReviewError::DataIntegrity(_)) {
            warn!(
                "被评审人 {} 的评审数据不一致 (活动 {}): {}",
                reviewee_id, peerreview.id, e
            );
        }
    })
}

pub async fn get_outcome(
    service: &ModerationService,
    request: &HttpRequest,
    peerreview_id: i64,
    reviewee_id: i64,
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

    let thresholds = &AppConfig::get().thresholds;
    match load_outcome(storage.as_ref(), &peerreview, reviewee_id, thresholds).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ApiResponse::success(outcome, "查询成功"))),
        Err(e) => Ok(error_response(&e)),
    }
}
