use sea_orm::DatabaseConnection;

use crate::server::{
    data::survey_response::SurveyResponseRepository,
    error::AppError,
    model::survey::{CreateSurveyResponseParam, SurveyResponse},
};

pub struct SurveyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a validated submission and returns the stored record.
    pub async fn submit(&self, param: CreateSurveyResponseParam) -> Result<SurveyResponse, AppError> {
        let repo = SurveyResponseRepository::new(self.db);

        let stored = repo.create(param).await?;

        tracing::info!(
            "Stored survey response {} from {}",
            stored.id,
            stored.in_game_name
        );

        SurveyResponse::from_entity(stored)
    }

    /// Gets all survey responses, newest first.
    pub async fn list(&self) -> Result<Vec<SurveyResponse>, AppError> {
        let repo = SurveyResponseRepository::new(self.db);

        repo.get_all()
            .await?
            .into_iter()
            .map(SurveyResponse::from_entity)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use test_utils::{builder::TestBuilder, factory::survey_response::SurveyResponseFactory};

    #[tokio::test]
    async fn submit_returns_stored_response() -> Result<(), AppError> {
        let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let param = CreateSurveyResponseParam {
            in_game_name: "Sable".to_string(),
            time_zone: "GMT-5_new_york".to_string(),
            time_ranges: vec!["15:00".to_string(), "16:00".to_string()],
        };

        let stored = SurveyService::new(db).submit(param).await?;

        assert!(stored.id > 0);
        assert_eq!(stored.in_game_name, "Sable");
        assert_eq!(stored.time_zone, "GMT-5_new_york");
        assert_eq!(stored.time_ranges, vec!["15:00", "16:00"]);

        let listed = SurveyService::new(db).list().await?;
        assert_eq!(listed, vec![stored]);

        Ok(())
    }

    #[tokio::test]
    async fn list_returns_newest_first() -> Result<(), AppError> {
        let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let now = Utc::now();
        let older = SurveyResponseFactory::new(db)
            .created_at(now - Duration::minutes(5))
            .build()
            .await?;
        let newer = SurveyResponseFactory::new(db).created_at(now).build().await?;

        let listed = SurveyService::new(db).list().await?;
        let ids: Vec<i32> = listed.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![newer.id, older.id]);

        Ok(())
    }

    #[tokio::test]
    async fn list_fails_on_malformed_stored_slots() -> Result<(), AppError> {
        let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        SurveyResponseFactory::new(db)
            .raw_time_ranges(serde_json::json!({ "slot": "09:00" }))
            .build()
            .await?;

        let result = SurveyService::new(db).list().await;

        assert!(matches!(result, Err(AppError::InternalErr(_))));

        Ok(())
    }

    #[tokio::test]
    async fn submit_fails_without_table() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let param = CreateSurveyResponseParam {
            in_game_name: "Sable".to_string(),
            time_zone: "GMT+0".to_string(),
            time_ranges: vec!["00:00".to_string()],
        };

        let result = SurveyService::new(db).submit(param).await;

        assert!(matches!(result, Err(AppError::DbErr(_))));
    }
}
