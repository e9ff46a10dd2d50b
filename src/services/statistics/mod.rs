//! 活动统计：评审统计、标准统计、提交统计与改进建议
//!
//! `StatisticsEngine` 只做纯计算；`StatisticsService` 负责读取数据并返回 HTTP 响应。

mod advice;
mod criteria;
mod engine;
pub mod numeric;
pub mod report;
mod reviews;
mod submissions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub use engine::StatisticsEngine;
pub use report::{StatisticsInputs, build_report};

pub struct StatisticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl StatisticsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
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

    pub async fn get_report(
        &self,
        request: &HttpRequest,
        peerreview_id: i64,
    ) -> ActixResult<HttpResponse> {
        report::get_report(self, request, peerreview_id).await
    }

    pub async fn get_review_statistics(
        &self,
        request: &HttpRequest,
        peerreview_id: i64,
    ) -> ActixResult<HttpResponse> {
        report::get_review_statistics(self, request, peerreview_id).await
    }

    pub async fn get_criteria_statistics(
        &self,
        request: &HttpRequest,
        peerreview_id: i64,
    ) -> ActixResult<HttpResponse> {
        report::get_criteria_statistics(self, request, peerreview_id).await
    }

    pub async fn get_submission_statistics(
        &self,
        request: &HttpRequest,
        peerreview_id: i64,
    ) -> ActixResult<HttpResponse> {
        report::get_submission_statistics(self, request, peerreview_id).await
    }
}
