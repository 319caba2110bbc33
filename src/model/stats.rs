use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneStatDto {
    pub time_zone: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeStatDto {
    pub time_range: String,
    pub count: u64,
}

/// One survey response as listed on the admin dashboard.
///
/// `normalizedTimeRanges` holds `timeRanges` shifted to the dashboard's reference offset,
/// in the same order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponseDto {
    pub id: i32,
    pub in_game_name: String,
    pub time_zone: String,
    pub time_ranges: Vec<String>,
    pub normalized_time_ranges: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Admin dashboard payload.
///
/// `timeRangeStats` holds slots normalized to `referenceOffset`, sorted by time of day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardDto {
    pub responses: Vec<DashboardResponseDto>,
    pub time_zone_stats: Vec<TimeZoneStatDto>,
    pub time_range_stats: Vec<TimeRangeStatDto>,
    pub reference_offset: String,
    pub total_responses: u64,
}
