use thiserror::Error;

use crate::server::error::time_slot::TimeSlotError;

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    /// A stored response could not be normalized.
    ///
    /// Aggregation stops at the first failing response in input order; no partial
    /// tallies are returned.
    #[error("Failed to aggregate time slots of survey response {response_id}: {source}")]
    Aggregation {
        /// ID of the offending survey response
        response_id: i32,
        #[source]
        source: TimeSlotError,
    },
}
