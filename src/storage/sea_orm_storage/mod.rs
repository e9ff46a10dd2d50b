//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod notifications;
mod participants;
mod peerreviews;
mod reviews;
mod submissions;

use crate::config::AppConfig;
use crate::errors::{PeerReviewError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PeerReviewError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PeerReviewError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| PeerReviewError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| PeerReviewError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PeerReviewError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    criteria::entities::Criterion,
    notifications::{entities::Notification, requests::CreateNotificationRequest},
    peerreviews::entities::{Capability, PeerReview},
    reviews::entities::Review,
    submissions::entities::Submission,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 活动模块
    async fn get_peerreview_by_id(&self, peerreview_id: i64) -> Result<Option<PeerReview>> {
        self.get_peerreview_by_id_impl(peerreview_id).await
    }

    async fn list_criteria(&self, peerreview_id: i64) -> Result<Vec<Criterion>> {
        self.list_criteria_impl(peerreview_id).await
    }

    // 提交模块
    async fn list_submissions(&self, peerreview_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_impl(peerreview_id).await
    }

    async fn get_submission_by_user(
        &self,
        peerreview_id: i64,
        user_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_user_impl(peerreview_id, user_id)
            .await
    }

    async fn set_submission_mark(
        &self,
        submission_id: i64,
        grade: f64,
        teacher_id: i64,
        mailed: bool,
    ) -> Result<Option<Submission>> {
        self.set_submission_mark_impl(submission_id, grade, teacher_id, mailed)
            .await
    }

    async fn set_submission_mailed(&self, submission_id: i64, mailed: bool) -> Result<()> {
        self.set_submission_mailed_impl(submission_id, mailed).await
    }

    // 评审模块
    async fn list_reviews_of_reviewee(
        &self,
        peerreview_id: i64,
        reviewee_id: i64,
    ) -> Result<Vec<Review>> {
        self.list_reviews_of_reviewee_impl(peerreview_id, reviewee_id)
            .await
    }

    async fn list_completed_reviews(&self, peerreview_id: i64) -> Result<Vec<Review>> {
        self.list_completed_reviews_impl(peerreview_id).await
    }

    async fn count_moderations(&self, peerreview_id: i64) -> Result<i64> {
        self.count_moderations_impl(peerreview_id).await
    }

    async fn count_reviews_completed_by(
        &self,
        peerreview_id: i64,
        reviewer_id: i64,
    ) -> Result<i64> {
        self.count_reviews_completed_by_impl(peerreview_id, reviewer_id)
            .await
    }

    async fn save_teacher_review(
        &self,
        peerreview_id: i64,
        reviewee_id: i64,
        teacher_id: i64,
        comment: &str,
        checks: &[bool],
    ) -> Result<Review> {
        self.save_teacher_review_impl(peerreview_id, reviewee_id, teacher_id, comment, checks)
            .await
    }

    // 参与者模块
    async fn list_users_with_capability(
        &self,
        peerreview_id: i64,
        capability: Capability,
    ) -> Result<Vec<i64>> {
        self.list_users_with_capability_impl(peerreview_id, capability)
            .await
    }

    // 通知模块
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification> {
        self.create_notification_impl(req).await
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! 内存 SQLite 存储与示例数据：活动 1，两条标准，用户 7 的提交与两份评审

    use super::SeaOrmStorage;
    use crate::entity::{criteria, participants, peerreviews, review_criteria, reviews, submissions};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, Set};

    pub async fn memory_storage() -> SeaOrmStorage {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    pub async fn seed(storage: &SeaOrmStorage) {
        peerreviews::ActiveModel {
            id: Set(1),
            name: Set("Essay".into()),
            review_reward: Set(0.5),
            created_at: Set(0),
        }
        .insert(&storage.db)
        .await
        .unwrap();

        // 序号从 1 开始，勾选记录按位置 0、1 存放
        for (ordinal, value) in [(1, 2.0), (2, 3.0)] {
            criteria::ActiveModel {
                peerreview_id: Set(1),
                ordinal: Set(ordinal),
                value: Set(value),
                text_before_review: Set(format!("criterion {ordinal}")),
                text_at_review: Set(format!("check {ordinal}")),
                ..Default::default()
            }
            .insert(&storage.db)
            .await
            .unwrap();
        }

        submissions::ActiveModel {
            peerreview_id: Set(1),
            user_id: Set(7),
            created_at: Set(500),
            grade: Set(None),
            teacher_id: Set(None),
            marked_at: Set(None),
            mailed: Set(false),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();

        for (reviewer, checks) in [(20, [true, false]), (21, [true, true])] {
            let review = reviews::ActiveModel {
                peerreview_id: Set(1),
                reviewer_id: Set(reviewer),
                reviewee_id: Set(7),
                completed: Set(true),
                teacher_review: Set(false),
                flagged: Set(false),
                comment: Set(String::new()),
                allocated_at: Set(900),
                downloaded_at: Set(1_000),
                completed_at: Set(1_100),
                first_viewed_at: Set(0),
                last_viewed_at: Set(0),
                view_count: Set(0),
                updated_at: Set(1_100),
                ..Default::default()
            }
            .insert(&storage.db)
            .await
            .unwrap();

            for (position, checked) in checks.into_iter().enumerate() {
                review_criteria::ActiveModel {
                    review_id: Set(review.id),
                    criterion: Set(position as i32),
                    checked: Set(checked),
                    ..Default::default()
                }
                .insert(&storage.db)
                .await
                .unwrap();
            }
        }

        for (user_id, can_submit, can_grade) in [(7, true, false), (8, true, false), (90, true, true)]
        {
            participants::ActiveModel {
                peerreview_id: Set(1),
                user_id: Set(user_id),
                can_submit: Set(can_submit),
                can_grade: Set(can_grade),
                ..Default::default()
            }
            .insert(&storage.db)
            .await
            .unwrap();
        }
    }

}

#[cfg(test)]
mod tests {
    use super::SeaOrmStorage;
    use super::fixtures::{memory_storage, seed};
    use crate::entity::review_criteria;
    use crate::models::peerreviews::entities::Capability;
    use crate::storage::Storage;
    use sea_orm::{ActiveModelTrait, Set};

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("peerreview.db").unwrap(),
            "sqlite://peerreview.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://localhost/pr").unwrap(),
            "postgres://localhost/pr"
        );
        let err = SeaOrmStorage::build_database_url("ftp://nowhere").unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[tokio::test]
    async fn test_reviews_load_with_checks() {
        let storage = memory_storage().await;
        seed(&storage).await;

        let reviews = storage.list_reviews_of_reviewee(1, 7).await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert!(reviews[0].checks.is_checked(0));
        assert!(!reviews[0].checks.is_checked(1));
        assert!(reviews[1].checks.is_checked(1));
        assert_eq!(reviews[0].review_seconds(), 100);
        assert!(reviews[0].first_viewed_at.is_none());

        assert_eq!(storage.count_reviews_completed_by(1, 20).await.unwrap(), 1);
        assert_eq!(
            storage
                .list_users_with_capability(1, Capability::Grade)
                .await
                .unwrap(),
            vec![90]
        );
        assert_eq!(
            storage
                .list_users_with_capability(1, Capability::Submit)
                .await
                .unwrap(),
            vec![7, 8, 90]
        );
    }

    #[tokio::test]
    async fn test_teacher_review_is_upserted() {
        let storage = memory_storage().await;
        seed(&storage).await;

        let first = storage
            .save_teacher_review(1, 7, 90, "needs work", &[false, true])
            .await
            .unwrap();
        let second = storage
            .save_teacher_review(1, 7, 90, "fine", &[true, true])
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert!(second.teacher_review);
        assert_eq!(storage.count_moderations(1).await.unwrap(), 1);

        let reviews = storage.list_reviews_of_reviewee(1, 7).await.unwrap();
        assert_eq!(reviews.len(), 3);
        let teacher = reviews.iter().find(|r| r.teacher_review).unwrap();
        assert_eq!(teacher.comment, "fine");
        assert!(teacher.checks.is_checked(0));
        assert!(teacher.checks.is_checked(1));
        // 教师评审不计入同学评审数
        assert_eq!(storage.count_reviews_completed_by(1, 90).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_set_submission_mark() {
        let storage = memory_storage().await;
        seed(&storage).await;

        let submission = storage.get_submission_by_user(1, 7).await.unwrap().unwrap();
        let updated = storage
            .set_submission_mark(submission.id, 8.5, 90, true)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.grade, Some(8.5));
        assert_eq!(updated.teacher_id, Some(90));
        assert!(updated.marked_at.is_some());
        assert!(updated.mailed);

        assert!(storage.set_submission_mark(999, 1.0, 90, false).await.unwrap().is_none());
        assert!(storage.get_submission_by_user(1, 8).await.unwrap().is_none());

        storage.set_submission_mailed(submission.id, false).await.unwrap();
        let reloaded = storage.get_submission_by_user(1, 7).await.unwrap().unwrap();
        assert!(!reloaded.mailed);
        assert_eq!(reloaded.grade, Some(8.5));
    }

    #[tokio::test]
    async fn test_negative_check_position_is_integrity_error() {
        let storage = memory_storage().await;
        seed(&storage).await;

        review_criteria::ActiveModel {
            review_id: Set(1),
            criterion: Set(-1),
            checked: Set(true),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();

        let err = storage.list_reviews_of_reviewee(1, 7).await.unwrap_err();
        assert_eq!(err.code(), "E008");
    }
}
