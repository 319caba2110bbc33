//! Survey response factory for inserting test survey rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test survey responses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::survey_response::SurveyResponseFactory;
///
/// let response = SurveyResponseFactory::new(&db)
///     .in_game_name("Sable")
///     .time_zone("UTC-3")
///     .time_ranges(["03:00"])
///     .build()
///     .await?;
/// ```
pub struct SurveyResponseFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::survey_response::Model,
}

impl<'a> SurveyResponseFactory<'a> {
    /// Creates a new factory with fixture defaults and a unique player name.
    ///
    /// The submission time defaults to now so rows created later sort first.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::survey_response::entity_builder()
            .in_game_name(format!("Player {}", id))
            .created_at(Utc::now())
            .build();

        Self { db, entity }
    }

    pub fn in_game_name(mut self, name: impl Into<String>) -> Self {
        self.entity.in_game_name = name.into();
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.entity.time_zone = time_zone.into();
        self
    }

    pub fn time_ranges<I, S>(mut self, time_ranges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = time_ranges.into_iter().map(Into::into).collect();
        self.entity.time_ranges = serde_json::json!(labels);
        self
    }

    /// Stores an arbitrary JSON value in the slot column.
    pub fn raw_time_ranges(mut self, value: serde_json::Value) -> Self {
        self.entity.time_ranges = value;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the survey response.
    ///
    /// # Returns
    /// - `Ok(entity::survey_response::Model)` - Inserted row with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::survey_response::Model, DbErr> {
        entity::survey_response::ActiveModel {
            id: ActiveValue::NotSet,
            in_game_name: ActiveValue::Set(self.entity.in_game_name),
            time_zone: ActiveValue::Set(self.entity.time_zone),
            time_ranges: ActiveValue::Set(self.entity.time_ranges),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a survey response with default values.
///
/// Shorthand for `SurveyResponseFactory::new(db).build().await`.
pub async fn create_survey_response(
    db: &DatabaseConnection,
) -> Result<entity::survey_response::Model, DbErr> {
    SurveyResponseFactory::new(db).build().await
}
