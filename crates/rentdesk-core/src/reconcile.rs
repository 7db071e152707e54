//! Keeps the picker's working range in step with the owning page.
//!
//! The owner passes its range in as props and is told about a new range only
//! when the user completes a selection that differs from what it already holds.

use chrono::NaiveDate;

use crate::date::DateCodec;
use crate::range::{ExternalDateRange, FormattedRange, InternalRange, RangeState};

/// Outcome of a user selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The candidate lacks an endpoint; the owner is not notified.
    Incomplete,
    /// Both formatted endpoints equal the owner's current value.
    Unchanged,
    /// The owner must be given this range.
    Changed(FormattedRange),
}

impl Reconciliation {
    /// The range to hand to the owner, if any.
    pub fn changed(&self) -> Option<&FormattedRange> {
        match self {
            Self::Changed(range) => Some(range),
            _ => None,
        }
    }

    pub fn into_changed(self) -> Option<FormattedRange> {
        match self {
            Self::Changed(range) => Some(range),
            _ => None,
        }
    }
}

/// State behind a date-range picker.
///
/// `revision` increases on every update of the working range, so callers can
/// tell whether a prop change caused a redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeController {
    codec: DateCodec,
    external: ExternalDateRange,
    internal: InternalRange,
    revision: u64,
}

impl DateRangeController {
    /// Create a controller for the given props with the default codec.
    pub fn new(external: ExternalDateRange) -> Self {
        Self::with_codec(external, DateCodec::default())
    }

    /// Create a controller for the given props and codec.
    pub fn with_codec(external: ExternalDateRange, codec: DateCodec) -> Self {
        let internal = codec.parse_range(&external);
        Self {
            codec,
            external,
            internal,
            revision: 0,
        }
    }

    pub fn codec(&self) -> &DateCodec {
        &self.codec
    }

    /// The owner's range as last received.
    pub fn external(&self) -> &ExternalDateRange {
        &self.external
    }

    /// The working range shown on the calendar.
    pub fn internal(&self) -> InternalRange {
        self.internal
    }

    pub fn state(&self) -> RangeState {
        self.internal.state()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Take in new props from the owner.
    ///
    /// Props are compared by parsed value with the previous props; when they
    /// are the same the working range keeps any local selection. New props
    /// that already match the working range leave it alone too (and
    /// `revision` unchanged). Returns whether the working range was replaced.
    pub fn sync_props(&mut self, external: &ExternalDateRange) -> bool {
        if self.external == *external {
            return false;
        }

        let previous = self.codec.parse_range(&self.external);
        self.external = external.clone();
        let parsed = self.codec.parse_range(&self.external);
        if parsed == previous || parsed == self.internal {
            return false;
        }

        log::debug!(
            "Range props changed: {:?} -> {:?}",
            self.internal,
            parsed
        );
        self.set_internal(parsed);
        true
    }

    /// Apply a candidate range chosen by the user.
    ///
    /// The working range always becomes `candidate`. The owner is only to be
    /// notified when the candidate is complete and its formatted endpoints
    /// differ from the owner's formatted value.
    pub fn select(&mut self, candidate: InternalRange) -> Reconciliation {
        self.set_internal(candidate);

        let Some((from, to)) = candidate.endpoints() else {
            return Reconciliation::Incomplete;
        };

        let next = FormattedRange::new(self.codec.format(from), self.codec.format(to));
        let current_start = self.codec.formatted(&self.external.start);
        let current_end = self.codec.formatted(&self.external.end);

        if next.start == current_start && next.end == current_end {
            log::debug!("Selection {:?} matches current range, not notifying", next);
            return Reconciliation::Unchanged;
        }

        log::debug!("Selection changed range to {:?}", next);
        Reconciliation::Changed(next)
    }

    /// Apply a candidate and call `set_date` if the owner must be notified.
    ///
    /// Returns whether `set_date` was called.
    pub fn select_with(
        &mut self,
        candidate: InternalRange,
        set_date: impl FnOnce(FormattedRange),
    ) -> bool {
        match self.select(candidate) {
            Reconciliation::Changed(range) => {
                set_date(range);
                true
            }
            _ => false,
        }
    }

    /// Apply a click on `day` using the calendar's range-building rules.
    pub fn select_day(&mut self, day: NaiveDate) -> Reconciliation {
        let candidate = self.internal.add_day(day);
        self.select(candidate)
    }

    fn set_internal(&mut self, range: InternalRange) {
        self.internal = range;
        self.revision = self.revision.wrapping_add(1);
    }
}
