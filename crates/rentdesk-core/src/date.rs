//! Date parsing and formatting for the dashboard's `dd/MM/yyyy` contract.
//!
//! Pages hand the picker either a date value or a string. Strings are read
//! with the external format first and only then with a permissive fallback
//! that accepts what a browser's generic date parser would.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::range::{ExternalDateRange, InternalRange};

/// External date format (`dd/MM/yyyy`), shared by parsing and formatting.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Date-only forms accepted by the fallback parser.
///
/// Slash dates are read month-first here, so `12/31/2024` parses while
/// `31/12/2024` is always caught by the strict format before reaching this.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
];

/// Date-time forms accepted by the fallback parser; the time is discarded.
const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date parsing errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Date {input:?} does not match format {format:?}")]
    Format { input: String, format: String },
    #[error("Date {0:?} is not in any recognised format")]
    Unrecognised(String),
}

/// Result type for date parsing.
pub type DateResult<T> = Result<T, DateError>;

/// A date as handed over by the owning page: a date value or its text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateLike {
    Instant(NaiveDate),
    Formatted(String),
}

impl From<NaiveDate> for DateLike {
    fn from(date: NaiveDate) -> Self {
        Self::Instant(date)
    }
}

impl From<String> for DateLike {
    fn from(text: String) -> Self {
        Self::Formatted(text)
    }
}

impl From<&str> for DateLike {
    fn from(text: &str) -> Self {
        Self::Formatted(text.to_string())
    }
}

/// Parses and formats dates with one shared format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCodec {
    format: String,
    fallback: bool,
}

impl Default for DateCodec {
    fn default() -> Self {
        Self {
            format: DATE_FORMAT.to_string(),
            fallback: true,
        }
    }
}

impl DateCodec {
    /// Create a codec for the given chrono format string, fallback enabled.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            fallback: true,
        }
    }

    /// Enable or disable the permissive fallback parser.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// The chrono format string used for both directions.
    pub fn format_str(&self) -> &str {
        &self.format
    }

    /// Whether the permissive fallback runs after a strict miss.
    pub fn fallback_enabled(&self) -> bool {
        self.fallback
    }

    /// Parse text with the external format only.
    pub fn parse_strict(&self, input: &str) -> DateResult<NaiveDate> {
        NaiveDate::parse_from_str(input, &self.format).map_err(|_| DateError::Format {
            input: input.to_string(),
            format: self.format.clone(),
        })
    }

    /// Parse text the way a generic date parser would.
    ///
    /// Ambiguous slash dates are read month-first.
    pub fn parse_fallback(input: &str) -> DateResult<NaiveDate> {
        let trimmed = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.date_naive());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
            return Ok(dt.date_naive());
        }
        for format in FALLBACK_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(dt.date());
            }
        }
        FALLBACK_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| DateError::Unrecognised(input.to_string()))
    }

    /// Resolve a `DateLike`, keeping the cause of a failure.
    pub fn try_parse(&self, value: &DateLike) -> DateResult<NaiveDate> {
        match value {
            DateLike::Instant(date) => Ok(*date),
            DateLike::Formatted(text) => match self.parse_strict(text) {
                Ok(date) => Ok(date),
                Err(strict_err) if !self.fallback => Err(strict_err),
                Err(_) => Self::parse_fallback(text),
            },
        }
    }

    /// Resolve a `DateLike`; failures are logged and yield `None`.
    pub fn parse(&self, value: &DateLike) -> Option<NaiveDate> {
        match self.try_parse(value) {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!("Leaving range endpoint unset: {}", e);
                None
            }
        }
    }

    /// Format a date with the external format.
    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.format)).is_ok() {
            return out;
        }
        log::error!(
            "Cannot render {} with format {:?}, using {:?}",
            date,
            self.format,
            DATE_FORMAT
        );
        date.format(DATE_FORMAT).to_string()
    }

    /// Text form of a `DateLike`: dates are formatted, strings pass through.
    pub fn formatted(&self, value: &DateLike) -> String {
        match value {
            DateLike::Instant(date) => self.format(*date),
            DateLike::Formatted(text) => text.clone(),
        }
    }

    /// Parse both endpoints of an external range.
    pub fn parse_range(&self, range: &ExternalDateRange) -> InternalRange {
        InternalRange::new(self.parse(&range.start), self.parse(&range.end))
    }
}

/// Parse a `DateLike` with the default codec.
pub fn parse_date_like(value: &DateLike) -> Option<NaiveDate> {
    DateCodec::default().parse(value)
}

/// Format a date with [`DATE_FORMAT`].
pub fn format_date(date: NaiveDate) -> String {
    DateCodec::default().format(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_instant_passes_through() {
        let date = ymd(2024, 2, 29);
        assert_eq!(parse_date_like(&DateLike::Instant(date)), Some(date));
    }

    #[test]
    fn test_strict_format() {
        assert_eq!(parse_date_like(&"01/01/2024".into()), Some(ymd(2024, 1, 1)));
        assert_eq!(parse_date_like(&"31/01/2024".into()), Some(ymd(2024, 1, 31)));
        // Day-first wins whenever the strict format matches
        assert_eq!(parse_date_like(&"01/02/2024".into()), Some(ymd(2024, 2, 1)));
    }

    #[test]
    fn test_round_trip_over_a_leap_year() {
        let codec = DateCodec::default();
        let mut day = ymd(2024, 1, 1);
        while day.year() == 2024 {
            let text = codec.format(day);
            let parsed = codec.parse(&DateLike::Formatted(text.clone())).unwrap();
            assert_eq!(codec.format(parsed), text);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_invalid_calendar_date_is_rejected() {
        let codec = DateCodec::default();
        assert!(codec.parse_strict("31/02/2024").is_err());
        assert!(codec.parse_strict("29/02/2023").is_err());
        assert_eq!(codec.parse(&"31/02/2024".into()), None);
    }

    #[test]
    fn test_fallback_iso_forms() {
        assert_eq!(parse_date_like(&"2024-03-05".into()), Some(ymd(2024, 3, 5)));
        assert_eq!(
            parse_date_like(&"2024-03-05T10:30:00Z".into()),
            Some(ymd(2024, 3, 5))
        );
        assert_eq!(
            parse_date_like(&"2024-03-05T10:30:00".into()),
            Some(ymd(2024, 3, 5))
        );
        assert_eq!(parse_date_like(&"  2024/03/05 ".into()), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn test_fallback_reads_slashes_month_first() {
        // Not a valid dd/MM/yyyy date, so the generic reading applies
        assert_eq!(parse_date_like(&"12/31/2024".into()), Some(ymd(2024, 12, 31)));
    }

    #[test]
    fn test_fallback_disabled() {
        let codec = DateCodec::default().with_fallback(false);
        assert!(!codec.fallback_enabled());
        assert_eq!(codec.parse(&"2024-03-05".into()), None);
        assert!(matches!(
            codec.try_parse(&"2024-03-05".into()),
            Err(DateError::Format { .. })
        ));
    }

    #[test]
    fn test_unrecognised_text() {
        let _ = env_logger::builder().is_test(true).try_init();

        let result = DateCodec::default().try_parse(&"next tuesday".into());
        assert_eq!(result, Err(DateError::Unrecognised("next tuesday".to_string())));
        assert_eq!(parse_date_like(&"".into()), None);
    }

    #[test]
    fn test_formatted_passes_strings_as_is() {
        let codec = DateCodec::default();
        assert_eq!(codec.formatted(&"1/1/2024".into()), "1/1/2024");
        assert_eq!(codec.formatted(&ymd(2024, 1, 1).into()), "01/01/2024");
    }

    #[test]
    fn test_custom_format() {
        let codec = DateCodec::new("%Y.%m.%d");
        assert_eq!(codec.format(ymd(2024, 7, 4)), "2024.07.04");
        assert_eq!(codec.parse_strict("2024.07.04"), Ok(ymd(2024, 7, 4)));
    }

    #[test]
    fn test_unrenderable_format_falls_back() {
        let codec = DateCodec::new("%Q");
        assert_eq!(codec.format(ymd(2024, 7, 4)), "04/07/2024");
    }

    #[test]
    fn test_date_like_deserializes_untagged() {
        let instant: DateLike = serde_json::from_str("\"2024-01-31\"").unwrap();
        assert_eq!(instant, DateLike::Instant(ymd(2024, 1, 31)));

        let text: DateLike = serde_json::from_str("\"31/01/2024\"").unwrap();
        assert_eq!(text, DateLike::Formatted("31/01/2024".to_string()));
    }
}
