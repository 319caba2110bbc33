//! Survey response fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::survey_response;
use serde_json::json;

/// Default in-game name.
pub const DEFAULT_IN_GAME_NAME: &str = "Commander Vex";

/// Default time zone descriptor, as sent by the form's city list.
pub const DEFAULT_TIME_ZONE: &str = "GMT+2_cairo";

/// Default selected slots.
pub const DEFAULT_TIME_RANGES: [&str; 2] = ["09:00", "10:00"];

/// Fixed submission time so fixtures compare equal across runs.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Creates a survey response entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - in_game_name: `"Commander Vex"`
/// - time_zone: `"GMT+2_cairo"`
/// - time_ranges: `["09:00", "10:00"]`
/// - created_at: `2025-06-01T12:00:00Z`
pub fn entity() -> survey_response::Model {
    entity_builder().build()
}

/// Creates a survey response entity builder for customization.
pub fn entity_builder() -> SurveyResponseEntityBuilder {
    SurveyResponseEntityBuilder {
        entity: survey_response::Model {
            id: 1,
            in_game_name: DEFAULT_IN_GAME_NAME.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            time_ranges: json!(DEFAULT_TIME_RANGES),
            created_at: default_created_at(),
        },
    }
}

/// Builder for in-memory survey response entity models.
pub struct SurveyResponseEntityBuilder {
    entity: survey_response::Model,
}

impl SurveyResponseEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn in_game_name(mut self, name: impl Into<String>) -> Self {
        self.entity.in_game_name = name.into();
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.entity.time_zone = time_zone.into();
        self
    }

    /// Sets the slot labels stored in the JSON column.
    pub fn time_ranges<I, S>(mut self, time_ranges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = time_ranges.into_iter().map(Into::into).collect();
        self.entity.time_ranges = json!(labels);
        self
    }

    /// Stores an arbitrary JSON value, used to simulate corrupted rows.
    pub fn raw_time_ranges(mut self, value: serde_json::Value) -> Self {
        self.entity.time_ranges = value;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    pub fn build(self) -> survey_response::Model {
        self.entity
    }
}
