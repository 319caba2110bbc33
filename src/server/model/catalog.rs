//! Fixed option lists rendered by the survey form.
//!
//! The form offers 24 one-hour slots and one entry per whole or half-hour GMT offset,
//! each labelled with an example city. City keys are translation keys resolved by the
//! frontend.

use crate::{
    model::survey::{SurveyOptionsDto, TimeSlotOptionDto, TimeZoneOptionDto},
    server::util::time_slot::SlotNormalizer,
};

/// GMT offsets offered by the form with their example city, west to east.
pub const TIME_ZONE_CITIES: [(&str, &str); 29] = [
    ("-12", "baker_island"),
    ("-11", "samoa"),
    ("-10", "hawaii"),
    ("-9", "alaska"),
    ("-8", "los_angeles"),
    ("-7", "denver"),
    ("-6", "chicago"),
    ("-5", "new_york"),
    ("-4", "caracas"),
    ("-3", "sao_paulo"),
    ("-2", "fernando"),
    ("-1", "cape_verde"),
    ("0", "london"),
    ("1", "paris"),
    ("2", "cairo"),
    ("3", "moscow"),
    ("4", "dubai"),
    ("5", "karachi"),
    ("5.5", "new_delhi"),
    ("6", "dhaka"),
    ("7", "bangkok"),
    ("8", "beijing"),
    ("9", "tokyo"),
    ("9.5", "adelaide"),
    ("10", "sydney"),
    ("11", "solomon"),
    ("12", "auckland"),
    ("13", "samoa_tonga"),
    ("14", "line_islands"),
];

const SLOTS_PER_DAY: u8 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlotOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeZoneOption {
    pub value: String,
    pub offset: String,
    pub city_key: String,
}

/// Selector contents for the survey form.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyOptions {
    pub time_slots: Vec<TimeSlotOption>,
    pub time_zones: Vec<TimeZoneOption>,
    pub reference_offset: String,
}

impl SurveyOptions {
    pub fn new(normalizer: &SlotNormalizer) -> Self {
        Self {
            time_slots: time_slot_options(),
            time_zones: time_zone_options(),
            reference_offset: normalizer.reference_offset().to_string(),
        }
    }

    pub fn into_dto(self) -> SurveyOptionsDto {
        SurveyOptionsDto {
            time_slots: self
                .time_slots
                .into_iter()
                .map(|slot| TimeSlotOptionDto {
                    value: slot.value,
                    label: slot.label,
                })
                .collect(),
            time_zones: self
                .time_zones
                .into_iter()
                .map(|zone| TimeZoneOptionDto {
                    value: zone.value,
                    offset: zone.offset,
                    city_key: zone.city_key,
                })
                .collect(),
            reference_offset: self.reference_offset,
        }
    }
}

/// The 24 hourly slots, `00:00` through `23:00`.
pub fn time_slot_options() -> Vec<TimeSlotOption> {
    (0..SLOTS_PER_DAY)
        .map(|hour| {
            let end = (hour + 1) % SLOTS_PER_DAY;
            TimeSlotOption {
                value: format!("{hour:02}:00"),
                label: format!("{hour:02}:00-{end:02}:00"),
            }
        })
        .collect()
}

/// One option per entry in [`TIME_ZONE_CITIES`], valued like `GMT+2_cairo`.
pub fn time_zone_options() -> Vec<TimeZoneOption> {
    TIME_ZONE_CITIES
        .iter()
        .map(|(offset, city_key)| {
            let sign = if offset.starts_with('-') { "" } else { "+" };
            let offset = format!("GMT{sign}{offset}");
            TimeZoneOption {
                value: format!("{offset}_{city_key}"),
                offset,
                city_key: city_key.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::util::time_slot::{TimeOfDay, UtcOffset};

    #[test]
    fn offers_one_slot_per_hour() {
        let slots = time_slot_options();

        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0].value, "00:00");
        assert_eq!(slots[0].label, "00:00-01:00");
        assert_eq!(slots[23].value, "23:00");
        assert_eq!(slots[23].label, "23:00-00:00");
    }

    #[test]
    fn every_slot_value_and_label_parses() {
        for slot in time_slot_options() {
            let value = TimeOfDay::parse_slot_label(&slot.value).unwrap();
            let label = TimeOfDay::parse_slot_label(&slot.label).unwrap();

            assert_eq!(value, label);
        }
    }

    #[test]
    fn every_time_zone_value_parses() {
        for zone in time_zone_options() {
            assert!(
                UtcOffset::parse_descriptor(&zone.value).is_ok(),
                "{} should parse",
                zone.value
            );
        }
    }

    #[test]
    fn time_zone_values_carry_sign_and_city() {
        let zones = time_zone_options();

        assert_eq!(zones.first().unwrap().value, "GMT-12_baker_island");
        assert_eq!(zones[12].value, "GMT+0_london");
        assert_eq!(zones[18].offset, "GMT+5.5");
        assert_eq!(zones.last().unwrap().value, "GMT+14_line_islands");
    }

    #[test]
    fn options_report_reference_offset() {
        let options = SurveyOptions::new(&SlotNormalizer::default());

        assert_eq!(options.reference_offset, "UTC-11");
    }
}
