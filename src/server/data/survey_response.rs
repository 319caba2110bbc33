use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::survey::CreateSurveyResponseParam;

pub struct SurveyResponseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyResponseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a survey response stamped with the current time.
    ///
    /// # Arguments
    /// - `param` - Validated submission
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored row, including its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateSurveyResponseParam,
    ) -> Result<entity::survey_response::Model, DbErr> {
        entity::survey_response::ActiveModel {
            in_game_name: ActiveValue::Set(param.in_game_name),
            time_zone: ActiveValue::Set(param.time_zone),
            time_ranges: ActiveValue::Set(serde_json::json!(param.time_ranges)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every stored response, newest first.
    ///
    /// Responses submitted at the same instant are ordered by id, highest first.
    pub async fn get_all(&self) -> Result<Vec<entity::survey_response::Model>, DbErr> {
        entity::prelude::SurveyResponse::find()
            .order_by_desc(entity::survey_response::Column::CreatedAt)
            .order_by_desc(entity::survey_response::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks that the database is reachable.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}
