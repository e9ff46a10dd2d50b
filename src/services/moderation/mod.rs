pub mod outcome;
pub mod set_mark;
pub mod teacher_review;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reviews::requests::TeacherReviewRequest;
use crate::models::submissions::requests::SetMarkRequest;
use crate::services::notifications::{Notifier, StorageNotifier};
use crate::storage::Storage;

pub use outcome::{evaluate_outcome, load_outcome};

pub struct ModerationService {
    storage: Option<Arc<dyn Storage>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ModerationService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            notifier: None,
        }
    }

    /// 使用指定的通知方式，存储仍从请求中获取
    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            storage: None,
            notifier: Some(notifier),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_notifier(&self, storage: Arc<dyn Storage>) -> Arc<dyn Notifier> {
        match &self.notifier {
            Some(notifier) => notifier.clone(),
            None => Arc::new(StorageNotifier::new(storage)),
        }
    }

    pub async fn get_outcome(
        &self,
        request: &HttpRequest,
        peerreview_id: i64,
        reviewee_id: i64,
    ) -> ActixResult<HttpResponse> {
        outcome::get_outcome(self, request, peerreview_id, reviewee_id).await
    }

    pub async fn save_teacher_review(
        &self,
        request: &HttpRequest,
        peerreview_id: i64,
        reviewee_id: i64,
        req: TeacherReviewRequest,
    ) -> ActixResult<HttpResponse> {
        teacher_review::save_teacher_review(self, request, peerreview_id, reviewee_id, req).await
    }

    pub async fn set_mark(
        &self,
        request: &HttpRequest,
        peerreview_id: i64,
        reviewee_id: i64,
        req: SetMarkRequest,
    ) -> ActixResult<HttpResponse> {
        set_mark::set_mark(self, request, peerreview_id, reviewee_id, req).await
    }
}
