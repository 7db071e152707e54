//! Picker configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::WeekStart;
use crate::date::{DATE_FORMAT, DateCodec};

/// Months shown side by side in the popup by default.
pub const DEFAULT_MONTHS_SHOWN: u8 = 2;

/// Most months the popup will lay out.
pub const MAX_MONTHS_SHOWN: u8 = 3;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("months_shown must be between 1 and {max}, got {got}")]
    MonthsShown { got: u8, max: u8 },
    #[error("Date format {0:?} does not survive a format/parse round trip")]
    DateFormat(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a date-range picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// chrono format string for the external date text
    pub date_format: String,
    /// Whether strings that miss `date_format` get a permissive second try
    pub fallback_parsing: bool,
    pub week_start: WeekStart,
    /// Months laid out side by side (1..=MAX_MONTHS_SHOWN)
    pub months_shown: u8,
    /// Whether neighbouring-month days fill the grid edges
    pub show_outside_days: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            date_format: DATE_FORMAT.to_string(),
            fallback_parsing: true,
            week_start: WeekStart::Monday,
            months_shown: DEFAULT_MONTHS_SHOWN,
            show_outside_days: true,
        }
    }
}

impl PickerConfig {
    /// Load and validate a JSON config document. Missing keys take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings can drive a picker.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.months_shown == 0 || self.months_shown > MAX_MONTHS_SHOWN {
            return Err(ConfigError::MonthsShown {
                got: self.months_shown,
                max: MAX_MONTHS_SHOWN,
            });
        }

        // A format must render and read back both single- and double-digit fields
        let codec = DateCodec::new(self.date_format.clone()).with_fallback(false);
        let probes = [
            NaiveDate::from_ymd_opt(2024, 1, 2),
            NaiveDate::from_ymd_opt(2023, 12, 31),
        ];
        for probe in probes.into_iter().flatten() {
            let round_trip = codec.parse_strict(&codec.format(probe)).ok();
            if round_trip != Some(probe) {
                return Err(ConfigError::DateFormat(self.date_format.clone()));
            }
        }
        Ok(())
    }

    /// Codec for this configuration.
    pub fn codec(&self) -> DateCodec {
        DateCodec::new(self.date_format.clone()).with_fallback(self.fallback_parsing)
    }
}
