use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_survey_response_table::SurveyResponse;

const INDEX_NAME: &str = "idx_survey_response_created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing always reads newest first.
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(SurveyResponse::Table)
                    .col(SurveyResponse::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(SurveyResponse::Table)
                    .to_owned(),
            )
            .await
    }
}
