//! 通知发送
//!
//! 成绩发布后通过 `Notifier` 告知学生，默认实现写入站内通知表。

use std::sync::Arc;

use crate::errors::{PeerReviewError, Result};
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::peerreviews::entities::PeerReview;
use crate::models::submissions::entities::Submission;
use crate::storage::Storage;

pub const GRADE_SET: &str = "grade_set";

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// 通知学生成绩已发布
    async fn notify_grade_set(
        &self,
        peerreview: &PeerReview,
        submission: &Submission,
        grade: f64,
        continue_url: Option<&str>,
    ) -> Result<()>;
}

/// 站内通知
pub struct StorageNotifier {
    storage: Arc<dyn Storage>,
}

impl StorageNotifier {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

pub(crate) fn grade_set_request(
    peerreview: &PeerReview,
    submission: &Submission,
    grade: f64,
    continue_url: Option<&str>,
) -> CreateNotificationRequest {
    let mut content = format!("{}\n成绩: {grade}", peerreview.name);
    if let Some(url) = continue_url {
        content.push_str(&format!("\n查看详情: {url}"));
    }

    CreateNotificationRequest {
        user_id: submission.user_id,
        notification_type: GRADE_SET.to_string(),
        title: "成绩已发布".to_string(),
        content: Some(content),
        reference_id: Some(submission.id),
    }
}

#[async_trait::async_trait]
impl Notifier for StorageNotifier {
    async fn notify_grade_set(
        &self,
        peerreview: &PeerReview,
        submission: &Submission,
        grade: f64,
        continue_url: Option<&str>,
    ) -> Result<()> {
        let req = grade_set_request(peerreview, submission, grade, continue_url);
        self.storage
            .create_notification(req)
            .await
            .map_err(|e| PeerReviewError::notification(format!("发送成绩通知失败: {e}")))?;
        Ok(())
    }
}
