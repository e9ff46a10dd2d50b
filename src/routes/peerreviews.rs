use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::reviews::requests::TeacherReviewRequest;
use crate::models::submissions::requests::SetMarkRequest;
use crate::services::{ModerationService, StatisticsService};

// 懒加载的全局服务实例
static STATISTICS_SERVICE: Lazy<StatisticsService> = Lazy::new(StatisticsService::new_lazy);
static MODERATION_SERVICE: Lazy<ModerationService> = Lazy::new(ModerationService::new_lazy);

// 获取完整统计报告
pub async fn get_statistics(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE
        .get_report(&req, path.into_inner())
        .await
}

// 获取评审统计
pub async fn get_review_statistics(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE
        .get_review_statistics(&req, path.into_inner())
        .await
}

// 获取评分标准统计
pub async fn get_criteria_statistics(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE
        .get_criteria_statistics(&req, path.into_inner())
        .await
}

// 获取提交统计
pub async fn get_submission_statistics(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE
        .get_submission_statistics(&req, path.into_inner())
        .await
}

// 获取被评审人的评审结论
pub async fn get_outcome(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (peerreview_id, reviewee_id) = path.into_inner();
    MODERATION_SERVICE
        .get_outcome(&req, peerreview_id, reviewee_id)
        .await
}

// 保存教师评审
pub async fn save_teacher_review(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: web::Json<TeacherReviewRequest>,
) -> ActixResult<HttpResponse> {
    let (peerreview_id, reviewee_id) = path.into_inner();
    MODERATION_SERVICE
        .save_teacher_review(&req, peerreview_id, reviewee_id, body.into_inner())
        .await
}

// 设置成绩
pub async fn set_mark(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: web::Json<SetMarkRequest>,
) -> ActixResult<HttpResponse> {
    let (peerreview_id, reviewee_id) = path.into_inner();
    MODERATION_SERVICE
        .set_mark(&req, peerreview_id, reviewee_id, body.into_inner())
        .await
}

// 配置路由
pub fn configure_peerreview_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/peerreviews/{id}")
            .service(web::resource("/statistics").route(web::get().to(get_statistics)))
            .service(
                web::resource("/statistics/reviews").route(web::get().to(get_review_statistics)),
            )
            .service(
                web::resource("/statistics/criteria")
                    .route(web::get().to(get_criteria_statistics)),
            )
            .service(
                web::resource("/statistics/submissions")
                    .route(web::get().to(get_submission_statistics)),
            )
            .service(
                web::resource("/reviewees/{user_id}/outcome").route(web::get().to(get_outcome)),
            )
            .service(
                web::resource("/reviewees/{user_id}/teacher-review")
                    .route(web::put().to(save_teacher_review)),
            )
            .service(web::resource("/reviewees/{user_id}/mark").route(web::put().to(set_mark))),
    );
}
