use thiserror::Error;

/// Failure to interpret a slot label or time zone descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeSlotError {
    /// No numeric UTC offset could be extracted, or it lies outside -12..=+14.
    #[error("Invalid time zone format: '{descriptor}'")]
    InvalidTimeZoneFormat { descriptor: String },

    /// The slot's start time is not a 24h `HH:MM` value.
    #[error("Invalid time slot label: '{label}'")]
    InvalidSlotLabel { label: String },
}
