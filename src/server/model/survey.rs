//! Survey response domain models and parameters.
//!
//! Provides the stored survey response model and the parameter type produced by
//! validating a submission body.

use chrono::{DateTime, Utc};

use crate::{
    model::survey::{SubmitSurveyDto, SurveyResponseDto},
    server::error::{internal::InternalError, validation::ValidationError, AppError},
};

/// One player's submitted availability.
///
/// Slot labels are kept exactly as submitted, in local time of `time_zone`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResponse {
    pub id: i32,
    pub in_game_name: String,
    /// Raw time zone descriptor, re-parsed whenever slots are normalized.
    pub time_zone: String,
    pub time_ranges: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl SurveyResponse {
    /// Converts an entity model to the survey response domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(SurveyResponse)` - The converted domain model
    /// - `Err(AppError::InternalErr(MalformedTimeRanges))` - Stored `time_ranges` is not a
    ///   JSON array of strings
    pub fn from_entity(entity: entity::survey_response::Model) -> Result<Self, AppError> {
        let time_ranges = serde_json::from_value(entity.time_ranges).map_err(|source| {
            InternalError::MalformedTimeRanges {
                id: entity.id,
                source,
            }
        })?;

        Ok(Self {
            id: entity.id,
            in_game_name: entity.in_game_name,
            time_zone: entity.time_zone,
            time_ranges,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> SurveyResponseDto {
        SurveyResponseDto {
            id: self.id,
            in_game_name: self.in_game_name,
            time_zone: self.time_zone,
            time_ranges: self.time_ranges,
            created_at: self.created_at,
        }
    }
}

/// Parameters for storing a new survey response.
///
/// Only constructed through [`CreateSurveyResponseParam::from_dto`], so every instance
/// has passed the presence checks.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSurveyResponseParam {
    pub in_game_name: String,
    pub time_zone: String,
    pub time_ranges: Vec<String>,
}

impl CreateSurveyResponseParam {
    /// Validates a submission body.
    ///
    /// Checks presence only: the name and time zone must be non-empty strings and at
    /// least one non-empty slot label must be selected. Values are stored as sent.
    ///
    /// # Returns
    /// - `Ok(CreateSurveyResponseParam)` - Body passed validation
    /// - `Err(ValidationError)` - First failed check, in field order
    pub fn from_dto(dto: SubmitSurveyDto) -> Result<Self, ValidationError> {
        let in_game_name = dto
            .in_game_name
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingField("inGameName"))?;

        let time_zone = dto
            .time_zone
            .filter(|time_zone| !time_zone.is_empty())
            .ok_or(ValidationError::MissingField("timeZone"))?;

        let time_ranges = dto
            .time_ranges
            .ok_or(ValidationError::MissingField("timeRanges"))?;

        if time_ranges.is_empty() {
            return Err(ValidationError::EmptyTimeRanges);
        }
        if time_ranges.iter().any(|label| label.is_empty()) {
            return Err(ValidationError::BlankTimeRange);
        }

        Ok(Self {
            in_game_name,
            time_zone,
            time_ranges,
        })
    }
}
