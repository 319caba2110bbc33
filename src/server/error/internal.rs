use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored `time_ranges` column is not a JSON array of strings
    ///
    /// Only rows written outside this application can trigger this. Results in a
    /// 500 Internal Server Error with a generic message returned to client.
    #[error("Survey response {id} has malformed time ranges: {source}")]
    MalformedTimeRanges {
        /// ID of the offending survey response row
        id: i32,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}
