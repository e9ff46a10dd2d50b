use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;
use tracing::debug;

use super::{StatisticsEngine, StatisticsService};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::criteria::entities::Criterion;
use crate::models::peerreviews::entities::{Capability, PeerReview};
use crate::models::reviews::entities::Review;
use crate::models::statistics::responses::StatisticsReport;
use crate::models::submissions::entities::Submission;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::storage::Storage;

/// 一次统计所需的数据快照
#[derive(Debug, Clone)]
pub struct StatisticsInputs {
    pub peerreview: PeerReview,
    pub criteria: Vec<Criterion>,
    pub submissions: Vec<Submission>,
    // 已完成的评审，包含教师评审
    pub reviews: Vec<Review>,
    pub number_of_moderations: i64,
    pub submitters: HashSet<i64>,
    pub graders: HashSet<i64>,
}

impl StatisticsInputs {
    pub async fn load(storage: &dyn Storage, peerreview: PeerReview) -> Result<Self> {
        let id = peerreview.id;
        let criteria = storage.list_criteria(id).await?;
        let submissions = storage.list_submissions(id).await?;
        let reviews = storage.list_completed_reviews(id).await?;
        let number_of_moderations = storage.count_moderations(id).await?;
        let submitters = storage
            .list_users_with_capability(id, Capability::Submit)
            .await?
            .into_iter()
            .collect();
        let graders = storage
            .list_users_with_capability(id, Capability::Grade)
            .await?
            .into_iter()
            .collect();

        debug!(
            "活动 {} 统计数据: {} 条提交, {} 条评审, {} 条标准",
            id,
            submissions.len(),
            reviews.len(),
            criteria.len()
        );

        Ok(Self {
            peerreview,
            criteria,
            submissions,
            reviews,
            number_of_moderations,
            submitters,
            graders,
        })
    }
}

/// 汇总三类统计与改进建议
pub fn build_report(engine: &StatisticsEngine, inputs: &StatisticsInputs) -> StatisticsReport {
    let reviews = engine.review_statistics(
        &inputs.reviews,
        inputs.submissions.len() as i64,
        inputs.number_of_moderations,
    );
    let criteria = engine.criteria_statistics(&inputs.criteria, &inputs.reviews);
    let submissions = engine.submission_statistics(
        &inputs.submissions,
        &inputs.reviews,
        &inputs.submitters,
        &inputs.graders,
    );
    let advice = engine.advice(&reviews, &criteria);

    StatisticsReport {
        peerreview_id: inputs.peerreview.id,
        submissions,
        reviews,
        criteria,
        advice,
    }
}

fn engine() -> StatisticsEngine {
    StatisticsEngine::new(AppConfig::get().thresholds.clone())
}

async fn fetch_inputs(
    service: &StatisticsService,
    request: &HttpRequest,
    peerreview_id: i64,
) -> std::result::Result<StatisticsInputs, HttpResponse> {
    let storage = service.get_storage(request);

    let peerreview = match storage.get_peerreview_by_id(peerreview_id).await {
        Ok(Some(peerreview)) => peerreview,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PeerReviewNotFound,
                "互评活动不存在",
            )));
        }
        Err(e) => return Err(error_response(&e)),
    };

    StatisticsInputs::load(storage.as_ref(), peerreview)
        .await
        .map_err(|e| error_response(&e))
}

pub async fn get_report(
    service: &StatisticsService,
    request: &HttpRequest,
    peerreview_id: i64,
) -> ActixResult<HttpResponse> {
    let inputs = match fetch_inputs(service, request, peerreview_id).await {
        Ok(inputs) => inputs,
        Err(response) => return Ok(response),
    };

    let report = build_report(&engine(), &inputs);
    Ok(HttpResponse::Ok().json(ApiResponse::success(report, "查询成功")))
}

pub async fn get_review_statistics(
    service: &StatisticsService,
    request: &HttpRequest,
    peerreview_id: i64,
) -> ActixResult<HttpResponse> {
    let inputs = match fetch_inputs(service, request, peerreview_id).await {
        Ok(inputs) => inputs,
        Err(response) => return Ok(response),
    };

    let stats = engine().review_statistics(
        &inputs.reviews,
        inputs.submissions.len() as i64,
        inputs.number_of_moderations,
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "查询成功")))
}

pub async fn get_criteria_statistics(
    service: &StatisticsService,
    request: &HttpRequest,
    peerreview_id: i64,
) -> ActixResult<HttpResponse> {
    let inputs = match fetch_inputs(service, request, peerreview_id).await {
        Ok(inputs) => inputs,
        Err(response) => return Ok(response),
    };

    let stats = engine().criteria_statistics(&inputs.criteria, &inputs.reviews);
    Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "查询成功")))
}

pub async fn get_submission_statistics(
    service: &StatisticsService,
    request: &HttpRequest,
    peerreview_id: i64,
) -> ActixResult<HttpResponse> {
    let inputs = match fetch_inputs(service, request, peerreview_id).await {
        Ok(inputs) => inputs,
        Err(response) => return Ok(response),
    };

    let stats = engine().submission_statistics(
        &inputs.submissions,
        &inputs.reviews,
        &inputs.submitters,
        &inputs.graders,
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "查询成功")))
}
