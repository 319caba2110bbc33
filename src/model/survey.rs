use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Survey submission body.
///
/// Every field is optional at the serde level so that absent fields surface as a
/// validation error (400) instead of a deserialization rejection. The aliases accept the
/// field names used by earlier versions of the form. A field and its alias count as the
/// same key, so a body carrying both (`inGameName` and `name`) is rejected as a duplicate
/// field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSurveyDto {
    #[serde(default, alias = "gameName", alias = "name")]
    pub in_game_name: Option<String>,
    /// Time zone descriptor such as `GMT+2_cairo` or `UTC-3`.
    #[serde(default, alias = "timeZoneDescriptor")]
    pub time_zone: Option<String>,
    /// Selected slot labels, e.g. `["09:00", "10:00"]`.
    #[serde(default, alias = "timeSlots")]
    pub time_ranges: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponseDto {
    pub id: i32,
    pub in_game_name: String,
    pub time_zone: String,
    pub time_ranges: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TimeSlotOptionDto {
    /// Value submitted in `timeRanges`, e.g. `09:00`.
    pub value: String,
    /// Display label, e.g. `09:00-10:00`.
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneOptionDto {
    /// Value submitted in `timeZone`, e.g. `GMT+2_cairo`.
    pub value: String,
    /// Signed offset as shown to the player, e.g. `GMT+2`.
    pub offset: String,
    /// Translation key of the example city.
    pub city_key: String,
}

/// Everything the survey form needs to render its selectors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyOptionsDto {
    pub time_slots: Vec<TimeSlotOptionDto>,
    pub time_zones: Vec<TimeZoneOptionDto>,
    /// Offset that the dashboard normalizes slots to, e.g. `UTC-11`.
    pub reference_offset: String,
}
