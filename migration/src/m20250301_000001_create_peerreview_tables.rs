use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建互评活动表
        manager
            .create_table(
                Table::create()
                    .table(PeerReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PeerReviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PeerReviews::Name).string().not_null())
                    .col(
                        ColumnDef::new(PeerReviews::ReviewReward)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(PeerReviews::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评分标准表
        manager
            .create_table(
                Table::create()
                    .table(Criteria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Criteria::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Criteria::PeerreviewId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Criteria::Ordinal).integer().not_null())
                    .col(ColumnDef::new(Criteria::Value).double().not_null())
                    .col(ColumnDef::new(Criteria::TextBeforeReview).text().not_null())
                    .col(ColumnDef::new(Criteria::TextAtReview).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Criteria::Table, Criteria::PeerreviewId)
                            .to(PeerReviews::Table, PeerReviews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::PeerreviewId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Submissions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Grade).double().null())
                    .col(ColumnDef::new(Submissions::TeacherId).big_integer().null())
                    .col(ColumnDef::new(Submissions::MarkedAt).big_integer().null())
                    .col(
                        ColumnDef::new(Submissions::Mailed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::PeerreviewId)
                            .to(PeerReviews::Table, PeerReviews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评审表
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reviews::PeerreviewId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reviews::ReviewerId).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::RevieweeId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Reviews::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reviews::TeacherReview)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reviews::Flagged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Reviews::Comment).text().not_null())
                    .col(
                        ColumnDef::new(Reviews::AllocatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reviews::DownloadedAt)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Reviews::CompletedAt)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Reviews::FirstViewedAt)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Reviews::LastViewedAt)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Reviews::ViewCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Reviews::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::PeerreviewId)
                            .to(PeerReviews::Table, PeerReviews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评审勾选表
        manager
            .create_table(
                Table::create()
                    .table(ReviewCriteria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReviewCriteria::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReviewCriteria::ReviewId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReviewCriteria::Criterion).integer().not_null())
                    .col(
                        ColumnDef::new(ReviewCriteria::Checked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReviewCriteria::Table, ReviewCriteria::ReviewId)
                            .to(Reviews::Table, Reviews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建参与者表
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Participants::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Participants::PeerreviewId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Participants::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Participants::CanSubmit)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Participants::CanGrade)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Participants::Table, Participants::PeerreviewId)
                            .to(PeerReviews::Table, PeerReviews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notifications::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Content).text().null())
                    .col(
                        ColumnDef::new(Notifications::ReferenceId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_peerreview_reviewee")
                    .table(Reviews::Table)
                    .col(Reviews::PeerreviewId)
                    .col(Reviews::RevieweeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_criteria_review")
                    .table(ReviewCriteria::Table)
                    .col(ReviewCriteria::ReviewId)
                    .col(ReviewCriteria::Criterion)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_peerreview_user")
                    .table(Submissions::Table)
                    .col(Submissions::PeerreviewId)
                    .col(Submissions::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_criteria_peerreview_ordinal")
                    .table(Criteria::Table)
                    .col(Criteria::PeerreviewId)
                    .col(Criteria::Ordinal)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Participants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReviewCriteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Criteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PeerReviews::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum PeerReviews {
    #[sea_orm(iden = "peerreviews")]
    Table,
    Id,
    Name,
    ReviewReward,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Criteria {
    #[sea_orm(iden = "peerreview_criteria")]
    Table,
    Id,
    PeerreviewId,
    Ordinal,
    Value,
    TextBeforeReview,
    TextAtReview,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "peerreview_submissions")]
    Table,
    Id,
    PeerreviewId,
    UserId,
    CreatedAt,
    Grade,
    TeacherId,
    MarkedAt,
    Mailed,
}

#[derive(DeriveIden)]
enum Reviews {
    #[sea_orm(iden = "peerreview_reviews")]
    Table,
    Id,
    PeerreviewId,
    ReviewerId,
    RevieweeId,
    Completed,
    TeacherReview,
    Flagged,
    Comment,
    AllocatedAt,
    DownloadedAt,
    CompletedAt,
    FirstViewedAt,
    LastViewedAt,
    ViewCount,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ReviewCriteria {
    #[sea_orm(iden = "peerreview_review_criteria")]
    Table,
    Id,
    ReviewId,
    Criterion,
    Checked,
}

#[derive(DeriveIden)]
enum Participants {
    #[sea_orm(iden = "peerreview_participants")]
    Table,
    Id,
    PeerreviewId,
    UserId,
    CanSubmit,
    CanGrade,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    UserId,
    NotificationType,
    Title,
    Content,
    ReferenceId,
    IsRead,
    CreatedAt,
}
