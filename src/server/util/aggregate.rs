//! Tallies over stored survey responses.
//!
//! [`aggregate_time_slots`] folds every selected slot into counts at the reference
//! offset. The two raw tallies count responses per time zone descriptor and slot
//! instances per label exactly as submitted.

use std::collections::HashMap;

use crate::server::{
    error::stats::StatsError,
    model::{
        stats::{TimeRangeCount, TimeZoneCount},
        survey::SurveyResponse,
    },
    util::time_slot::{SlotNormalizer, TimeOfDay},
};

/// Counts every selected slot after shifting it to the normalizer's reference offset.
///
/// Output is sorted by time of day. The sum of all counts equals the total number of
/// slot labels across `responses`.
///
/// # Returns
/// - `Ok(Vec<TimeRangeCount>)` - One entry per distinct normalized `HH:MM` label
/// - `Err(StatsError::Aggregation)` - First response, in input order, holding a label
///   or descriptor that does not parse
pub fn aggregate_time_slots(
    responses: &[SurveyResponse],
    normalizer: &SlotNormalizer,
) -> Result<Vec<TimeRangeCount>, StatsError> {
    let mut tallies: Vec<(TimeOfDay, u64)> = Vec::new();
    let mut index: HashMap<TimeOfDay, usize> = HashMap::new();

    for response in responses {
        for slot in normalize_time_ranges(response, normalizer)? {
            match index.get(&slot) {
                Some(&position) => tallies[position].1 += 1,
                None => {
                    index.insert(slot, tallies.len());
                    tallies.push((slot, 1));
                }
            }
        }
    }

    tallies.sort_by_key(|(slot, _)| *slot);

    Ok(tallies
        .into_iter()
        .map(|(slot, count)| TimeRangeCount {
            time_range: slot.to_string(),
            count,
        })
        .collect())
}

/// Shifts every slot of one response to the reference offset, in submission order.
///
/// # Returns
/// - `Ok(Vec<TimeOfDay>)` - One entry per submitted label
/// - `Err(StatsError::Aggregation)` - A label or the response's descriptor does not parse
pub fn normalize_time_ranges(
    response: &SurveyResponse,
    normalizer: &SlotNormalizer,
) -> Result<Vec<TimeOfDay>, StatsError> {
    response
        .time_ranges
        .iter()
        .map(|label| {
            normalizer
                .normalize(label, &response.time_zone)
                .map_err(|source| StatsError::Aggregation {
                    response_id: response.id,
                    source,
                })
        })
        .collect()
}

/// Counts responses per raw time zone descriptor, most common first.
///
/// Each response counts once regardless of how many slots it selected.
pub fn count_time_zones(responses: &[SurveyResponse]) -> Vec<TimeZoneCount> {
    tally(responses.iter().map(|response| response.time_zone.as_str()))
        .into_iter()
        .map(|(time_zone, count)| TimeZoneCount { time_zone, count })
        .collect()
}

/// Counts slot instances per raw label, most common first.
pub fn count_time_ranges(responses: &[SurveyResponse]) -> Vec<TimeRangeCount> {
    tally(
        responses
            .iter()
            .flat_map(|response| response.time_ranges.iter().map(String::as_str)),
    )
    .into_iter()
    .map(|(time_range, count)| TimeRangeCount { time_range, count })
    .collect()
}

/// Count descending, ties broken by key ascending.
fn tally<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }

    let mut counts: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    counts
}
