use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::ModerationService;
use crate::errors::Result;
use crate::models::peerreviews::entities::PeerReview;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::SetMarkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::services::notifications::Notifier;
use crate::storage::Storage;
use crate::utils::validate_grade;

/// 写入成绩后再通知学生，通知成功时才把 `mailed` 置为 true。
///
/// 提交不存在时返回 `Ok(None)` 且不发送通知；成绩写入失败时不发送通知。
pub async fn record_mark(
    storage: &dyn Storage,
    notifier: &dyn Notifier,
    peerreview: &PeerReview,
    submission: &Submission,
    grade: f64,
    teacher_id: i64,
    continue_url: Option<&str>,
) -> Result<Option<Submission>> {
    let Some(mut updated) = storage
        .set_submission_mark(submission.id, grade, teacher_id, false)
        .await?
    else {
        return Ok(None);
    };

    // 通知失败不回滚成绩，只记录为未送达
    match notifier
        .notify_grade_set(peerreview, &updated, grade, continue_url)
        .await
    {
        Ok(()) => match storage.set_submission_mailed(updated.id, true).await {
            Ok(()) => updated.mailed = true,
            Err(e) => warn!("提交 {} 的通知状态更新失败: {}", updated.id, e),
        },
        Err(e) => warn!("用户 {} 的成绩通知未送达: {}", updated.user_id, e),
    }

    Ok(Some(updated))
}

pub async fn set_mark(
    service: &ModerationService,
    request: &HttpRequest,
    peerreview_id: i64,
    reviewee_id: i64,
    req: SetMarkRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = validate_grade(req.grade) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, e.message())));
    }

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

    let submission = match storage
        .get_submission_by_user(peerreview_id, reviewee_id)
        .await
    {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "该用户没有提交",
            )));
        }
        Err(e) => return Ok(error_response(&e)),
    };

    let notifier = service.get_notifier(storage.clone());
    match record_mark(
        storage.as_ref(),
        notifier.as_ref(),
        &peerreview,
        &submission,
        req.grade,
        req.teacher_id,
        req.continue_url.as_deref(),
    )
    .await
    {
        Ok(Some(updated)) => {
            info!(
                "教师 {} 为用户 {} 设置成绩 {} (活动 {})",
                req.teacher_id, reviewee_id, req.grade, peerreview_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "成绩已保存")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "该用户没有提交",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PeerReviewError;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::sea_orm_storage::fixtures::{memory_storage, seed};
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::web;
    use sea_orm::ConnectionTrait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingNotifier {
        fail: bool,
        calls: AtomicUsize,
    }

    impl RecordingNotifier {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify_grade_set(
            &self,
            _peerreview: &PeerReview,
            submission: &Submission,
            _grade: f64,
            _continue_url: Option<&str>,
        ) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // 通知时成绩必须已经落库
            assert!(submission.grade.is_some());
            if self.fail {
                Err(PeerReviewError::notification("mail server down"))
            } else {
                Ok(())
            }
        }
    }

    async fn seeded() -> (SeaOrmStorage, PeerReview, Submission) {
        let storage = memory_storage().await;
        seed(&storage).await;
        let peerreview = storage.get_peerreview_by_id(1).await.unwrap().unwrap();
        let submission = storage.get_submission_by_user(1, 7).await.unwrap().unwrap();
        (storage, peerreview, submission)
    }

    #[tokio::test]
    async fn test_record_mark_sets_mailed_after_notification() {
        let (storage, peerreview, submission) = seeded().await;
        let notifier = RecordingNotifier::new(false);

        let updated = record_mark(&storage, &notifier, &peerreview, &submission, 8.0, 90, None)
            .await
            .unwrap()
            .unwrap();

        assert!(updated.mailed);
        assert_eq!(notifier.calls(), 1);
        let stored = storage.get_submission_by_user(1, 7).await.unwrap().unwrap();
        assert_eq!(stored.grade, Some(8.0));
        assert!(stored.mailed);
    }

    #[tokio::test]
    async fn test_record_mark_keeps_grade_when_notification_fails() {
        let (storage, peerreview, submission) = seeded().await;
        let notifier = RecordingNotifier::new(true);

        let updated = record_mark(&storage, &notifier, &peerreview, &submission, 6.5, 90, None)
            .await
            .unwrap()
            .unwrap();

        assert!(!updated.mailed);
        assert_eq!(notifier.calls(), 1);
        let stored = storage.get_submission_by_user(1, 7).await.unwrap().unwrap();
        assert_eq!(stored.grade, Some(6.5));
        assert_eq!(stored.teacher_id, Some(90));
        assert!(!stored.mailed);
    }

    #[tokio::test]
    async fn test_record_mark_missing_submission_sends_nothing() {
        let (storage, peerreview, mut submission) = seeded().await;
        submission.id = 999;
        let notifier = RecordingNotifier::new(false);

        let updated = record_mark(&storage, &notifier, &peerreview, &submission, 8.0, 90, None)
            .await
            .unwrap();

        assert!(updated.is_none());
        assert_eq!(notifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_record_mark_write_failure_sends_nothing() {
        let (storage, peerreview, submission) = seeded().await;
        storage
            .db
            .execute_unprepared("DROP TABLE peerreview_submissions")
            .await
            .unwrap();
        let notifier = RecordingNotifier::new(false);

        let err = record_mark(&storage, &notifier, &peerreview, &submission, 8.0, 90, None)
            .await
            .unwrap_err();

        assert_eq!(err.code(), "E003");
        assert_eq!(notifier.calls(), 0);
    }

    fn mark_request(grade: f64) -> SetMarkRequest {
        SetMarkRequest {
            teacher_id: 90,
            grade,
            continue_url: None,
        }
    }

    #[actix_web::test]
    async fn test_set_mark_without_submission_is_not_found() {
        let storage = memory_storage().await;
        seed(&storage).await;
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();
        let notifier = Arc::new(RecordingNotifier::new(false));
        let service = ModerationService::with_notifier(notifier.clone());

        let resp = set_mark(&service, &request, 1, 8, mark_request(7.0))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(notifier.calls(), 0);
    }

    #[actix_web::test]
    async fn test_set_mark_reports_unsent_notification() {
        let storage = memory_storage().await;
        seed(&storage).await;
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = TestRequest::default()
            .app_data(web::Data::new(storage.clone()))
            .to_http_request();
        let notifier = Arc::new(RecordingNotifier::new(true));
        let service = ModerationService::with_notifier(notifier.clone());

        let resp = set_mark(&service, &request, 1, 7, mark_request(7.0))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["mailed"], false);
        assert_eq!(json["data"]["grade"], 7.0);
        assert_eq!(notifier.calls(), 1);

        let stored = storage.get_submission_by_user(1, 7).await.unwrap().unwrap();
        assert_eq!(stored.grade, Some(7.0));
    }

    #[actix_web::test]
    async fn test_set_mark_rejects_invalid_grade() {
        let notifier = Arc::new(RecordingNotifier::new(false));
        let service = ModerationService::with_notifier(notifier.clone());
        let request = TestRequest::default().to_http_request();

        let resp = set_mark(&service, &request, 1, 7, mark_request(-1.0))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(notifier.calls(), 0);
    }
}
