use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::stats::{AdminDashboard, DashboardEntry, TimeRangeCount, TimeZoneCount},
    service::survey::SurveyService,
    util::{
        aggregate::{
            aggregate_time_slots, count_time_ranges, count_time_zones, normalize_time_ranges,
        },
        time_slot::SlotNormalizer,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    normalizer: SlotNormalizer,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection, normalizer: SlotNormalizer) -> Self {
        Self { db, normalizer }
    }

    /// Responses per raw time zone descriptor, most common first.
    pub async fn time_zone_stats(&self) -> Result<Vec<TimeZoneCount>, AppError> {
        let responses = SurveyService::new(self.db).list().await?;

        Ok(count_time_zones(&responses))
    }

    /// Slot instances per raw label, most common first.
    pub async fn time_range_stats(&self) -> Result<Vec<TimeRangeCount>, AppError> {
        let responses = SurveyService::new(self.db).list().await?;

        Ok(count_time_ranges(&responses))
    }

    /// Builds the admin dashboard from a single listing of all responses.
    ///
    /// Slot counts and each response's slots are normalized to the reference offset. A
    /// stored response whose descriptor or labels cannot be parsed fails the whole
    /// dashboard.
    ///
    /// # Returns
    /// - `Ok(AdminDashboard)` - Responses newest first with their statistics
    /// - `Err(AppError::DbErr)` - Listing failed
    /// - `Err(AppError::StatsErr)` - A stored response could not be normalized
    pub async fn dashboard(&self) -> Result<AdminDashboard, AppError> {
        let responses = SurveyService::new(self.db).list().await?;

        let time_zone_stats = count_time_zones(&responses);
        let time_range_stats = aggregate_time_slots(&responses, &self.normalizer)?;

        let entries = responses
            .into_iter()
            .map(|response| {
                let normalized_time_ranges = normalize_time_ranges(&response, &self.normalizer)?
                    .iter()
                    .map(ToString::to_string)
                    .collect();

                Ok(DashboardEntry {
                    response,
                    normalized_time_ranges,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(AdminDashboard {
            responses: entries,
            time_zone_stats,
            time_range_stats,
            reference_offset: self.normalizer.reference_offset().to_string(),
        })
    }
}
