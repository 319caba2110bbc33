use crate::server::{
    error::{config::ConfigError, AppError},
    util::time_slot::{ConversionPolicy, SlotNormalizer, DEFAULT_REFERENCE_OFFSET_HOURS},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3001";

/// Valid range for `REFERENCE_OFFSET_HOURS`.
const REFERENCE_OFFSET_RANGE: std::ops::RangeInclusive<i32> = -12..=14;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub reference_offset_hours: i32,
    pub slot_conversion: ConversionPolicy,
}

impl Config {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a variable if set.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required values present and optional values valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - An optional value failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let reference_offset_hours = match lookup("REFERENCE_OFFSET_HOURS") {
            Some(value) => parse_reference_offset(&value)?,
            None => DEFAULT_REFERENCE_OFFSET_HOURS,
        };

        let slot_conversion = match lookup("SLOT_CONVERSION") {
            Some(value) => value.parse::<ConversionPolicy>().map_err(|reason| {
                ConfigError::InvalidEnvVar {
                    key: "SLOT_CONVERSION".to_string(),
                    value: value.clone(),
                    reason,
                }
            })?,
            None => ConversionPolicy::default(),
        };

        Ok(Self {
            database_url,
            bind_address,
            reference_offset_hours,
            slot_conversion,
        })
    }

    pub fn normalizer(&self) -> SlotNormalizer {
        SlotNormalizer::new(self.reference_offset_hours, self.slot_conversion)
    }
}

fn parse_reference_offset(value: &str) -> Result<i32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        key: "REFERENCE_OFFSET_HOURS".to_string(),
        value: value.to_string(),
        reason,
    };

    let hours: i32 = value.trim().parse().map_err(|e| invalid(format!("{e}")))?;

    if !REFERENCE_OFFSET_RANGE.contains(&hours) {
        return Err(invalid("must be between -12 and 14".to_string()));
    }

    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_address, "0.0.0.0:3001");
        assert_eq!(config.reference_offset_hours, -11);
        assert_eq!(config.slot_conversion, ConversionPolicy::Observed);
        assert_eq!(config.normalizer(), SlotNormalizer::default());
    }

    #[test]
    fn requires_database_url() {
        let result = config_from(&[]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(key))) if key == "DATABASE_URL"
        ));
    }

    #[test]
    fn reads_optional_values() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://survey@localhost/survey"),
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("REFERENCE_OFFSET_HOURS", "3"),
            ("SLOT_CONVERSION", "offset-aware"),
        ])
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(
            config.normalizer(),
            SlotNormalizer::new(3, ConversionPolicy::OffsetAware)
        );
    }

    #[test]
    fn rejects_out_of_range_reference_offset() {
        for value in ["15", "-13", "eleven"] {
            let result = config_from(&[
                ("DATABASE_URL", "sqlite::memory:"),
                ("REFERENCE_OFFSET_HOURS", value),
            ]);

            assert!(matches!(
                result,
                Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
            ));
        }
    }

    #[test]
    fn rejects_unknown_conversion_policy() {
        let result = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SLOT_CONVERSION", "guess"),
        ]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { key, .. })) if key == "SLOT_CONVERSION"
        ));
    }
}
