/// 创建通知
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub notification_type: String,
    pub title: String,
    pub content: Option<String>,
    // 关联的提交 ID
    pub reference_id: Option<i64>,
}
