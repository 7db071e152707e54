//! Range values exchanged between the picker and its owning page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::DateLike;

/// Range as held by the owning page (the picker's props).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalDateRange {
    pub start: DateLike,
    pub end: DateLike,
}

impl ExternalDateRange {
    /// Create a range from anything convertible to a `DateLike`.
    pub fn new(start: impl Into<DateLike>, end: impl Into<DateLike>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Range pushed back to the owner, both endpoints in the external format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormattedRange {
    pub start: String,
    pub end: String,
}

impl FormattedRange {
    /// Create a formatted range.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl From<FormattedRange> for ExternalDateRange {
    fn from(range: FormattedRange) -> Self {
        Self {
            start: DateLike::Formatted(range.start),
            end: DateLike::Formatted(range.end),
        }
    }
}

/// How many endpoints of a range are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeState {
    Uninitialized,
    Partial,
    Complete,
}

/// The picker's working range, always held as dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternalRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl InternalRange {
    /// Range with neither endpoint chosen.
    pub const EMPTY: Self = Self {
        from: None,
        to: None,
    };

    /// Create a range from optional endpoints.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Create a range with both endpoints set.
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn state(&self) -> RangeState {
        match (self.from, self.to) {
            (Some(_), Some(_)) => RangeState::Complete,
            (None, None) => RangeState::Uninitialized,
            _ => RangeState::Partial,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == RangeState::Complete
    }

    /// Both endpoints, if chosen.
    pub fn endpoints(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.from?, self.to?))
    }

    /// Whether `day` lies within the range, endpoints included.
    ///
    /// A single endpoint contains only itself.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
                lo <= day && day <= hi
            }
            (Some(edge), None) | (None, Some(edge)) => edge == day,
            (None, None) => false,
        }
    }

    /// Whether `day` is one of the chosen endpoints.
    pub fn is_endpoint(&self, day: NaiveDate) -> bool {
        self.from == Some(day) || self.to == Some(day)
    }

    /// Number of days covered, both endpoints included.
    pub fn day_count(&self) -> Option<i64> {
        let (from, to) = self.endpoints()?;
        Some((to - from).num_days().abs() + 1)
    }

    /// Candidate range after the user clicks `day` on the calendar.
    pub fn add_day(&self, day: NaiveDate) -> Self {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                if from == day && to == day {
                    Self::EMPTY
                } else if to == day {
                    Self::new(Some(to), None)
                } else if from == day {
                    Self::EMPTY
                } else if day < from {
                    Self::between(day, to)
                } else {
                    Self::between(from, day)
                }
            }
            (None, Some(to)) => {
                if day > to {
                    Self::between(to, day)
                } else {
                    Self::between(day, to)
                }
            }
            (Some(from), None) => {
                if day < from {
                    Self::between(day, from)
                } else {
                    Self::between(from, day)
                }
            }
            (None, None) => Self::new(Some(day), None),
        }
    }
}
