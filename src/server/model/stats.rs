//! Aggregated survey statistics.

use crate::{
    model::stats::{AdminDashboardDto, DashboardResponseDto, TimeRangeStatDto, TimeZoneStatDto},
    server::model::survey::SurveyResponse,
};

/// Number of responses submitted with one time zone descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeZoneCount {
    pub time_zone: String,
    pub count: u64,
}

impl TimeZoneCount {
    pub fn into_dto(self) -> TimeZoneStatDto {
        TimeZoneStatDto {
            time_zone: self.time_zone,
            count: self.count,
        }
    }
}

/// Number of selected slot instances sharing one label.
///
/// Used both for raw labels and for labels normalized to the reference offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangeCount {
    pub time_range: String,
    pub count: u64,
}

impl TimeRangeCount {
    pub fn into_dto(self) -> TimeRangeStatDto {
        TimeRangeStatDto {
            time_range: self.time_range,
            count: self.count,
        }
    }
}

/// A stored response with its slots shifted to the reference offset.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEntry {
    pub response: SurveyResponse,
    /// `HH:MM` labels in the same order as `response.time_ranges`.
    pub normalized_time_ranges: Vec<String>,
}

impl DashboardEntry {
    pub fn into_dto(self) -> DashboardResponseDto {
        DashboardResponseDto {
            id: self.response.id,
            in_game_name: self.response.in_game_name,
            time_zone: self.response.time_zone,
            time_ranges: self.response.time_ranges,
            normalized_time_ranges: self.normalized_time_ranges,
            created_at: self.response.created_at,
        }
    }
}

/// Everything the admin dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    /// All responses, newest first.
    pub responses: Vec<DashboardEntry>,
    /// Responses per time zone, most common first.
    pub time_zone_stats: Vec<TimeZoneCount>,
    /// Slot tallies at the reference offset, sorted by time of day.
    pub time_range_stats: Vec<TimeRangeCount>,
    /// Reference offset label, e.g. `UTC-11`.
    pub reference_offset: String,
}

impl AdminDashboard {
    pub fn into_dto(self) -> AdminDashboardDto {
        let total_responses = self.responses.len() as u64;

        AdminDashboardDto {
            responses: self
                .responses
                .into_iter()
                .map(DashboardEntry::into_dto)
                .collect(),
            time_zone_stats: self
                .time_zone_stats
                .into_iter()
                .map(TimeZoneCount::into_dto)
                .collect(),
            time_range_stats: self
                .time_range_stats
                .into_iter()
                .map(TimeRangeCount::into_dto)
                .collect(),
            reference_offset: self.reference_offset,
            total_responses,
        }
    }
}
