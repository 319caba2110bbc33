//! Time slot normalization.
//!
//! Players pick hourly slots in their own local time and tag the submission with a time
//! zone descriptor (`GMT+2_cairo`, `GMT-5_local`, `UTC-3`). The admin dashboard compares
//! availability at a single reference offset, so every slot is shifted to that offset
//! before being tallied.
//!
//! Two conversion policies exist:
//!
//! - [`ConversionPolicy::Observed`] subtracts the magnitude of the reference offset from
//!   the local hour and ignores the player's own offset. This is the arithmetic the
//!   dashboard has always used, so existing aggregates stay comparable.
//! - [`ConversionPolicy::OffsetAware`] converts local time to UTC using the player's
//!   offset, then to the reference offset. Half-hour zones shift the minutes.
//!
//! The descriptor is parsed and validated under both policies.

use std::{fmt, str::FromStr};

use crate::server::error::time_slot::TimeSlotError;

const MINUTES_PER_HOUR: i32 = 60;
const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

/// Westernmost offset accepted in a descriptor, in hours.
const MIN_OFFSET_HOURS: i32 = -12;
/// Easternmost offset accepted in a descriptor, in hours.
const MAX_OFFSET_HOURS: i32 = 14;

/// Reference offset used when none is configured (UTC-11).
pub const DEFAULT_REFERENCE_OFFSET_HOURS: i32 = -11;

/// A wall-clock time within a single day.
///
/// Ordering is by hour, then minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Parses the start time of a slot label.
    ///
    /// Accepts a bare start time (`"09:00"`) or a range (`"09:00 - 10:00"`,
    /// `"09:00-10:00"`). Only the start time is read.
    ///
    /// # Returns
    /// - `Ok(TimeOfDay)` - Start time of the slot
    /// - `Err(TimeSlotError::InvalidSlotLabel)` - Start time is not a 24h `H:MM`/`HH:MM`
    pub fn parse_slot_label(label: &str) -> Result<Self, TimeSlotError> {
        let invalid = || TimeSlotError::InvalidSlotLabel {
            label: label.to_string(),
        };

        let start = label.split('-').next().unwrap_or_default().trim();
        let (hour, minute) = start.split_once(':').ok_or_else(invalid)?;

        if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
            return Err(invalid());
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self { hour, minute })
    }

    /// Builds a time from minutes since midnight, wrapping into a single day.
    fn from_minutes(minutes: i32) -> Self {
        let minutes = minutes.rem_euclid(MINUTES_PER_DAY);

        Self {
            hour: (minutes / MINUTES_PER_HOUR) as u8,
            minute: (minutes % MINUTES_PER_HOUR) as u8,
        }
    }

    fn as_minutes(self) -> i32 {
        i32::from(self.hour) * MINUTES_PER_HOUR + i32::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A signed offset from UTC with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub fn from_hours(hours: i32) -> Self {
        Self {
            minutes: hours.saturating_mul(MINUTES_PER_HOUR),
        }
    }

    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// Extracts the UTC offset from a time zone descriptor.
    ///
    /// The descriptor starts with `GMT` or `UTC` (any case), followed by a signed offset
    /// in hours (`+2`, `-5`, `0`), optionally with a fraction (`+5.5`) or minutes
    /// (`+5:30`). Anything after the number, such as `_local` or a city key, is ignored.
    ///
    /// # Returns
    /// - `Ok(UtcOffset)` - Parsed offset within -12..=+14 hours
    /// - `Err(TimeSlotError::InvalidTimeZoneFormat)` - No prefix, no numeric offset, or
    ///   offset out of range
    pub fn parse_descriptor(descriptor: &str) -> Result<Self, TimeSlotError> {
        let invalid = || TimeSlotError::InvalidTimeZoneFormat {
            descriptor: descriptor.to_string(),
        };

        let trimmed = descriptor.trim();
        let rest = strip_prefix_ignore_case(trimmed, "GMT")
            .or_else(|| strip_prefix_ignore_case(trimmed, "UTC"))
            .ok_or_else(invalid)?;

        let (sign, rest) = match rest.as_bytes().first() {
            Some(b'+') => (1, &rest[1..]),
            Some(b'-') => (-1, &rest[1..]),
            _ => (1, rest),
        };

        let hours = leading_digits(rest);
        if hours.is_empty() {
            return Err(invalid());
        }
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        if hours > MAX_OFFSET_HOURS {
            return Err(invalid());
        }
        let rest = &rest[leading_digits(rest).len()..];

        let minutes = if let Some(fraction) = rest.strip_prefix('.') {
            let digits = leading_digits(fraction);
            if digits.is_empty() {
                0
            } else {
                let fraction: f64 = format!("0.{digits}").parse().map_err(|_| invalid())?;
                (fraction * f64::from(MINUTES_PER_HOUR)).round() as i32
            }
        } else if let Some(minutes) = rest.strip_prefix(':') {
            let digits = leading_digits(minutes);
            if digits.len() != 2 {
                return Err(invalid());
            }
            let minutes: i32 = digits.parse().map_err(|_| invalid())?;
            if minutes >= MINUTES_PER_HOUR {
                return Err(invalid());
            }
            minutes
        } else {
            0
        };

        let total = sign * (hours * MINUTES_PER_HOUR + minutes);
        let range = MIN_OFFSET_HOURS * MINUTES_PER_HOUR..=MAX_OFFSET_HOURS * MINUTES_PER_HOUR;
        if !range.contains(&total) {
            return Err(invalid());
        }

        Ok(Self { minutes: total })
    }
}

/// Formats as `UTC-11`, `UTC+0` or `UTC+5:30`.
impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let hours = self.minutes.unsigned_abs() / MINUTES_PER_HOUR as u32;
        let minutes = self.minutes.unsigned_abs() % MINUTES_PER_HOUR as u32;

        if minutes == 0 {
            write!(f, "UTC{sign}{hours}")
        } else {
            write!(f, "UTC{sign}{hours}:{minutes:02}")
        }
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;

    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

fn leading_digits(value: &str) -> &str {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    &value[..end]
}

/// How a local slot is shifted to the reference offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionPolicy {
    /// `local hour - |reference offset|`, minutes preserved.
    #[default]
    Observed,
    /// `local time - zone offset + reference offset`.
    OffsetAware,
}

impl FromStr for ConversionPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "observed" => Ok(Self::Observed),
            "offset-aware" | "offset_aware" => Ok(Self::OffsetAware),
            other => Err(format!(
                "unknown conversion policy '{other}', expected 'observed' or 'offset-aware'"
            )),
        }
    }
}

/// Shifts slot labels to a fixed reference offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotNormalizer {
    reference_offset_hours: i32,
    policy: ConversionPolicy,
}

impl SlotNormalizer {
    pub fn new(reference_offset_hours: i32, policy: ConversionPolicy) -> Self {
        Self {
            reference_offset_hours,
            policy,
        }
    }

    pub fn policy(&self) -> ConversionPolicy {
        self.policy
    }

    pub fn reference_offset(&self) -> UtcOffset {
        UtcOffset::from_hours(self.reference_offset_hours)
    }

    /// Converts the start of `label`, entered in `descriptor`'s zone, to the reference
    /// offset.
    ///
    /// # Returns
    /// - `Ok(TimeOfDay)` - Start time at the reference offset
    /// - `Err(TimeSlotError)` - Malformed label or descriptor
    pub fn normalize(&self, label: &str, descriptor: &str) -> Result<TimeOfDay, TimeSlotError> {
        let start = TimeOfDay::parse_slot_label(label)?;
        let zone = UtcOffset::parse_descriptor(descriptor)?;

        // Whole days wrap away, so only the reference offset modulo 24 hours matters.
        let shifted = match self.policy {
            ConversionPolicy::Observed => {
                let magnitude = (self.reference_offset_hours.unsigned_abs() % 24) as i32;
                start.as_minutes() - magnitude * MINUTES_PER_HOUR
            }
            ConversionPolicy::OffsetAware => {
                start.as_minutes() - zone.minutes()
                    + self.reference_offset_hours.rem_euclid(24) * MINUTES_PER_HOUR
            }
        };

        Ok(TimeOfDay::from_minutes(shifted))
    }
}

impl Default for SlotNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_OFFSET_HOURS, ConversionPolicy::Observed)
    }
}

/// Normalizes a slot label with the observed policy.
///
/// Shorthand for `SlotNormalizer::new(reference_offset_hours, ConversionPolicy::Observed)`
/// followed by formatting the result as `HH:MM`.
pub fn normalize(
    label: &str,
    descriptor: &str,
    reference_offset_hours: i32,
) -> Result<String, TimeSlotError> {
    SlotNormalizer::new(reference_offset_hours, ConversionPolicy::Observed)
        .normalize(label, descriptor)
        .map(|slot| slot.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_aware() -> SlotNormalizer {
        SlotNormalizer::new(-11, ConversionPolicy::OffsetAware)
    }

    #[test]
    fn range_and_bare_start_time_are_equivalent() {
        let bare = normalize("09:00", "GMT+2", 11).unwrap();
        let range = normalize("09:00 - 10:00", "GMT+2", 11).unwrap();
        let compact = normalize("09:00-10:00", "GMT+2", 11).unwrap();

        assert_eq!(bare, range);
        assert_eq!(bare, compact);
    }

    #[test]
    fn observed_policy_subtracts_reference_magnitude() {
        assert_eq!(normalize("09:00", "GMT+2", 11).unwrap(), "22:00");
        assert_eq!(normalize("09:00", "GMT+2", -11).unwrap(), "22:00");
        assert_eq!(normalize("15:00", "GMT-5_new_york", 11).unwrap(), "04:00");
        assert_eq!(normalize("11:00", "UTC+0", 11).unwrap(), "00:00");
    }

    #[test]
    fn observed_policy_ignores_zone_offset() {
        let east = normalize("09:00", "GMT+9_tokyo", 11).unwrap();
        let west = normalize("09:00", "GMT-8_los_angeles", 11).unwrap();

        assert_eq!(east, west);
    }

    #[test]
    fn observed_output_stays_within_day_and_keeps_minutes() {
        for hour in 0..24 {
            for minute in [0, 15, 30, 59] {
                let label = format!("{hour:02}:{minute:02}");
                let slot = SlotNormalizer::new(-11, ConversionPolicy::Observed)
                    .normalize(&label, "GMT+3_moscow")
                    .unwrap();

                assert!(slot.hour <= 23);
                assert_eq!(slot.minute, minute);
            }
        }
    }

    #[test]
    fn offset_aware_policy_converts_through_utc() {
        let normalizer = offset_aware();

        // 09:00 at UTC+2 is 07:00 UTC, which is 20:00 the previous day at UTC-11.
        assert_eq!(normalizer.normalize("09:00", "GMT+2").unwrap().to_string(), "20:00");
        // 09:00 at UTC-5 is 14:00 UTC, which is 03:00 at UTC-11.
        assert_eq!(normalizer.normalize("09:00", "GMT-5").unwrap().to_string(), "03:00");
        // Already at the reference offset.
        assert_eq!(normalizer.normalize("09:00", "GMT-11_samoa").unwrap().to_string(), "09:00");
    }

    #[test]
    fn extreme_reference_offsets_wrap_instead_of_overflowing() {
        assert_eq!(normalize("09:00", "GMT+2", i32::MIN).unwrap(), "01:00");
        assert_eq!(normalize("09:00", "GMT+2", i32::MAX).unwrap(), "02:00");
        assert_eq!(normalize("09:00", "GMT+2", 35).unwrap(), "22:00");

        let normalizer = SlotNormalizer::new(i32::MIN, ConversionPolicy::OffsetAware);
        assert_eq!(
            normalizer.normalize("09:00", "GMT+2").unwrap().to_string(),
            "23:00"
        );
        assert_eq!(normalizer.reference_offset().minutes(), i32::MIN);
        assert!(normalizer.reference_offset().to_string().starts_with("UTC-"));
    }

    #[test]
    fn offset_aware_policy_shifts_minutes_for_half_hour_zones() {
        let normalizer = offset_aware();

        assert_eq!(
            normalizer.normalize("09:00", "GMT+5.5_new_delhi").unwrap().to_string(),
            "16:30"
        );
        assert_eq!(normalizer.normalize("09:00", "UTC+9:30").unwrap().to_string(), "12:30");
    }

    #[test]
    fn descriptor_without_offset_is_rejected() {
        for descriptor in ["not-a-zone", "GMT", "UTC_local", "GMT+_cairo", "", "EST+5"] {
            assert_eq!(
                normalize("09:00", descriptor, 11),
                Err(TimeSlotError::InvalidTimeZoneFormat {
                    descriptor: descriptor.to_string()
                }),
                "descriptor {descriptor:?} should be rejected"
            );
        }
    }

    #[test]
    fn descriptor_out_of_range_is_rejected() {
        assert!(UtcOffset::parse_descriptor("GMT+15").is_err());
        assert!(UtcOffset::parse_descriptor("GMT-13").is_err());
        assert!(UtcOffset::parse_descriptor("GMT+14:30").is_err());
        assert!(UtcOffset::parse_descriptor("GMT+99999999999").is_err());
    }

    #[test]
    fn descriptor_suffix_tags_are_ignored() {
        assert_eq!(UtcOffset::parse_descriptor("GMT+2_local").unwrap().minutes(), 120);
        assert_eq!(UtcOffset::parse_descriptor("GMT-5_new_york").unwrap().minutes(), -300);
        assert_eq!(UtcOffset::parse_descriptor("utc-3").unwrap().minutes(), -180);
        assert_eq!(UtcOffset::parse_descriptor("GMT0").unwrap().minutes(), 0);
        assert_eq!(UtcOffset::parse_descriptor(" GMT+14_line_islands ").unwrap().minutes(), 840);
        assert_eq!(UtcOffset::parse_descriptor("GMT-12_baker_island").unwrap().minutes(), -720);
    }

    #[test]
    fn malformed_slot_labels_are_rejected() {
        for label in ["", "9", "24:00", "09:60", "ab:cd", "+9:00", "09:0", "- 10:00"] {
            assert_eq!(
                TimeOfDay::parse_slot_label(label),
                Err(TimeSlotError::InvalidSlotLabel {
                    label: label.to_string()
                }),
                "label {label:?} should be rejected"
            );
        }
    }

    #[test]
    fn single_digit_hours_are_zero_padded() {
        assert_eq!(TimeOfDay::parse_slot_label("9:05").unwrap().to_string(), "09:05");
    }

    #[test]
    fn reference_offset_formats_as_utc_label() {
        assert_eq!(UtcOffset::from_hours(-11).to_string(), "UTC-11");
        assert_eq!(UtcOffset::from_hours(0).to_string(), "UTC+0");
        assert_eq!(UtcOffset::parse_descriptor("GMT+5:30").unwrap().to_string(), "UTC+5:30");
    }

    #[test]
    fn conversion_policy_parses_from_config_values() {
        assert_eq!("observed".parse(), Ok(ConversionPolicy::Observed));
        assert_eq!("Offset-Aware".parse(), Ok(ConversionPolicy::OffsetAware));
        assert!("utc".parse::<ConversionPolicy>().is_err());
    }
}
