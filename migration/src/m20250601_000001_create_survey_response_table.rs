use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SurveyResponse::Table)
                    .if_not_exists()
                    .col(pk_auto(SurveyResponse::Id))
                    .col(string(SurveyResponse::InGameName))
                    .col(string(SurveyResponse::TimeZone))
                    .col(json(SurveyResponse::TimeRanges))
                    .col(
                        timestamp_with_time_zone(SurveyResponse::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SurveyResponse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SurveyResponse {
    Table,
    Id,
    InGameName,
    TimeZone,
    TimeRanges,
    CreatedAt,
}
