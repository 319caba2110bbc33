use sea_orm::DatabaseConnection;

use crate::server::{data::survey_response::SurveyResponseRepository, error::AppError};

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pings the database.
    ///
    /// # Returns
    /// - `Ok(())` - Storage is reachable
    /// - `Err(AppError::DbErr)` - Ping failed
    pub async fn check(&self) -> Result<(), AppError> {
        SurveyResponseRepository::new(self.db).ping().await?;

        Ok(())
    }
}
