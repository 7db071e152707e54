//! Rentdesk Core Library
//!
//! Date-range parsing, selection and reconciliation shared by the calendar and
//! report pages of the Rentdesk rental dashboard. Platform-agnostic; the egui
//! front end lives in `rentdesk-widgets`.

pub mod calendar;
pub mod config;
pub mod date;
pub mod query;
pub mod range;
pub mod reconcile;

pub use calendar::{
    first_of_month, shift_months, today, CalendarDay, MonthGrid, Week, WeekStart,
};
pub use config::{
    ConfigError, ConfigResult, PickerConfig, DEFAULT_MONTHS_SHOWN, MAX_MONTHS_SHOWN,
};
pub use date::{
    format_date, parse_date_like, DateCodec, DateError, DateLike, DateResult, DATE_FORMAT,
};
pub use query::{END_DATE_PARAM, START_DATE_PARAM};
pub use range::{ExternalDateRange, FormattedRange, InternalRange, RangeState};
pub use reconcile::{DateRangeController, Reconciliation};
