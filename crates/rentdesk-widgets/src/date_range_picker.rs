//! Date-range picker: trigger button plus a multi-month calendar popup.
//!
//! The owning page passes its range every frame and receives a
//! [`FormattedRange`] back only when the user completes a range that differs
//! from the one it holds. Working state survives between frames in egui's
//! temporary memory, keyed by the widget id.

use std::hash::Hash;

use chrono::NaiveDate;
use egui::{vec2, Id, Key, Order, Ui};
use rentdesk_core::{
    first_of_month, shift_months, today, DateCodec, DateRangeController, ExternalDateRange,
    FormattedRange, InternalRange, MonthGrid, PickerConfig, MAX_MONTHS_SHOWN,
};

use crate::buttons::TriggerButton;
use crate::calendar::MonthView;
use crate::frame::popup_frame;
use crate::layout::{section_label, separator, vertical_separator};
use crate::sizing;

/// Placeholder shown while no endpoint is chosen.
const DEFAULT_PLACEHOLDER: &str = "Pick a date range";

/// Per-widget state kept across frames.
#[derive(Debug, Clone)]
struct PickerState {
    controller: DateRangeController,
    /// First displayed month.
    view_month: NaiveDate,
    open: bool,
}

impl PickerState {
    fn new(date: &ExternalDateRange, codec: DateCodec) -> Self {
        let controller = DateRangeController::with_codec(date.clone(), codec);
        let view_month = anchor_month(controller.internal());
        Self {
            controller,
            view_month,
            open: false,
        }
    }

    fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.view_month = anchor_month(self.controller.internal());
        }
    }

    fn navigate(&mut self, delta: i32) {
        if delta != 0 {
            self.view_month = shift_months(self.view_month, delta);
        }
    }

    fn click_day(&mut self, day: NaiveDate) -> Option<FormattedRange> {
        self.controller.select_day(day).into_changed()
    }
}

/// Month the popup opens on: the start of the range, else today.
fn anchor_month(range: InternalRange) -> NaiveDate {
    first_of_month(range.from.or(range.to).unwrap_or_else(today))
}

/// Trigger text and whether it is the placeholder.
fn range_label(controller: &DateRangeController, placeholder: &str) -> (String, bool) {
    let codec = controller.codec();
    let range = controller.internal();
    match (range.from, range.to) {
        (Some(from), Some(to)) => (format!("{} - {}", codec.format(from), codec.format(to)), false),
        (Some(from), None) => (format!("{} - ...", codec.format(from)), false),
        (None, Some(to)) => (format!("... - {}", codec.format(to)), false),
        (None, None) => (placeholder.to_string(), true),
    }
}

fn footer_text(range: InternalRange) -> String {
    match range.day_count() {
        Some(1) => "1 day selected".to_string(),
        Some(days) => format!("{} days selected", days),
        None if range.from.is_some() || range.to.is_some() => "Select the end date".to_string(),
        None => "Select the start date".to_string(),
    }
}

/// A date-range picker bound to the owner's range.
///
/// ```ignore
/// if let Some(range) = DateRangePicker::new("report_range", &page.range).show(ui) {
///     page.range = range.into();
/// }
/// ```
pub struct DateRangePicker<'a> {
    id_salt: Id,
    date: &'a ExternalDateRange,
    config: PickerConfig,
    placeholder: &'a str,
    min_width: f32,
}

impl<'a> DateRangePicker<'a> {
    /// Create a picker for the owner's `date` range.
    pub fn new(id_salt: impl Hash, date: &'a ExternalDateRange) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            date,
            config: PickerConfig::default(),
            placeholder: DEFAULT_PLACEHOLDER,
            min_width: sizing::TRIGGER_MIN_WIDTH,
        }
    }

    /// Use the given configuration (format, week start, display flags).
    pub fn config(mut self, config: &PickerConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Number of months shown side by side.
    pub fn months(mut self, months: u8) -> Self {
        self.config.months_shown = months.clamp(1, MAX_MONTHS_SHOWN);
        self
    }

    /// Whether neighbouring-month days fill the grid edges.
    pub fn show_outside_days(mut self, show: bool) -> Self {
        self.config.show_outside_days = show;
        self
    }

    /// Text shown on the trigger while nothing is selected.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Minimum width of the trigger button.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }

    /// Show the picker. Returns the new range when the owner must update.
    pub fn show(self, ui: &mut Ui) -> Option<FormattedRange> {
        let id = ui.make_persistent_id(self.id_salt);
        let codec = self.config.codec();

        let mut state = ui
            .data_mut(|d| d.get_temp::<PickerState>(id))
            .filter(|state| state.controller.codec() == &codec)
            .unwrap_or_else(|| PickerState::new(self.date, codec));
        state.controller.sync_props(self.date);

        let (label, is_placeholder) = range_label(&state.controller, self.placeholder);
        let (clicked, anchor) = TriggerButton::new(&label)
            .muted(is_placeholder)
            .active(state.open)
            .min_width(self.min_width)
            .show(ui);
        if clicked {
            state.toggle();
        }

        let mut changed = None;
        if state.open {
            let area = egui::Area::new(id.with("popup"))
                .fixed_pos(anchor.left_bottom() + vec2(0.0, 4.0))
                .order(Order::Foreground)
                .show(ui.ctx(), |ui| {
                    popup_frame().show(ui, |ui| self.popup_contents(ui, id, &mut state))
                });
            changed = area.inner.inner;
            if let Some(range) = &changed {
                log::debug!("Range picker {:?} selected {:?}", id, range);
            }

            let escape = ui.input(|i| i.key_pressed(Key::Escape));
            if escape || (area.response.clicked_elsewhere() && !clicked) {
                state.open = false;
            }
        }

        ui.data_mut(|d| d.insert_temp(id, state));
        changed
    }

    fn popup_contents(&self, ui: &mut Ui, id: Id, state: &mut PickerState) -> Option<FormattedRange> {
        let range = state.controller.internal();
        let today = today();
        let months = self.config.months_shown.clamp(1, MAX_MONTHS_SHOWN);
        let mut navigate = 0;
        let mut clicked_day = None;

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing = vec2(0.0, 0.0);
            for index in 0..months {
                if index > 0 {
                    vertical_separator(ui, sizing::DAY_CELL * 7.0);
                }
                let grid = MonthGrid::new(
                    shift_months(state.view_month, i32::from(index)),
                    self.config.week_start,
                );
                let response = MonthView::new(id.with(("month", index)), &grid, range, today)
                    .show_outside_days(self.config.show_outside_days)
                    .navigation(index == 0, index + 1 == months)
                    .show(ui);
                if response.navigate != 0 {
                    navigate = response.navigate;
                }
                if response.clicked.is_some() {
                    clicked_day = response.clicked;
                }
            }
        });

        separator(ui);
        section_label(ui, &footer_text(range));

        state.navigate(navigate);
        clicked_day.and_then(|day| state.click_day(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentdesk_core::RangeState;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january() -> ExternalDateRange {
        ExternalDateRange::new("01/01/2024", "31/01/2024")
    }

    /// Run one frame with the picker and return its output and id.
    fn run_frame(
        ctx: &egui::Context,
        date: &ExternalDateRange,
        config: &PickerConfig,
    ) -> (Option<FormattedRange>, Id) {
        let mut out = None;
        let mut id = Id::NULL;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                id = ui.make_persistent_id(Id::new("report_range"));
                out = DateRangePicker::new("report_range", date)
                    .config(config)
                    .show(ui);
            });
        });
        (out, id)
    }

    fn stored_state(ctx: &egui::Context, id: Id) -> PickerState {
        ctx.data_mut(|d| d.get_temp::<PickerState>(id)).unwrap()
    }

    #[test]
    fn test_first_frame_parses_props() {
        let ctx = egui::Context::default();
        let (out, id) = run_frame(&ctx, &january(), &PickerConfig::default());

        assert_eq!(out, None);
        let state = stored_state(&ctx, id);
        assert_eq!(
            state.controller.internal(),
            InternalRange::between(ymd(2024, 1, 1), ymd(2024, 1, 31))
        );
        assert_eq!(state.view_month, ymd(2024, 1, 1));
        assert!(!state.open);
    }

    #[test]
    fn test_equal_props_do_not_touch_state() {
        let ctx = egui::Context::default();
        let config = PickerConfig::default();
        let (_, id) = run_frame(&ctx, &january(), &config);

        // Same dates handed over as date values
        let same = ExternalDateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 31));
        run_frame(&ctx, &same, &config);
        assert_eq!(stored_state(&ctx, id).controller.revision(), 0);

        let march = ExternalDateRange::new("01/03/2024", "15/03/2024");
        run_frame(&ctx, &march, &config);
        let state = stored_state(&ctx, id);
        assert_eq!(state.controller.revision(), 1);
        assert_eq!(
            state.controller.internal(),
            InternalRange::between(ymd(2024, 3, 1), ymd(2024, 3, 15))
        );
    }

    #[test]
    fn test_partial_click_survives_next_frame() {
        let ctx = egui::Context::default();
        let config = PickerConfig::default();
        let empty = ExternalDateRange::new("", "");
        let (_, id) = run_frame(&ctx, &empty, &config);

        ctx.data_mut(|d| {
            let mut state = d.get_temp::<PickerState>(id).unwrap();
            assert_eq!(state.click_day(ymd(2024, 3, 1)), None);
            d.insert_temp(id, state);
        });

        // Owner has nothing new to say
        run_frame(&ctx, &empty, &config);
        let state = stored_state(&ctx, id);
        assert_eq!(
            state.controller.internal(),
            InternalRange::new(Some(ymd(2024, 3, 1)), None)
        );
        assert_eq!(state.controller.revision(), 1);
    }

    #[test]
    fn test_collapse_survives_next_frame() {
        let ctx = egui::Context::default();
        let config = PickerConfig::default();
        let (_, id) = run_frame(&ctx, &january(), &config);

        // Clicking the current end restarts the range from that day
        ctx.data_mut(|d| {
            let mut state = d.get_temp::<PickerState>(id).unwrap();
            assert_eq!(state.click_day(ymd(2024, 1, 31)), None);
            d.insert_temp(id, state);
        });

        run_frame(&ctx, &january(), &config);
        assert_eq!(
            stored_state(&ctx, id).controller.internal(),
            InternalRange::new(Some(ymd(2024, 1, 31)), None)
        );
    }

    #[test]
    fn test_open_popup_renders() {
        let ctx = egui::Context::default();
        let config = PickerConfig::default();
        let (_, id) = run_frame(&ctx, &january(), &config);

        ctx.data_mut(|d| {
            let mut state = d.get_temp::<PickerState>(id).unwrap();
            state.toggle();
            d.insert_temp(id, state);
        });

        let (out, _) = run_frame(&ctx, &january(), &config);
        assert_eq!(out, None);
        assert!(stored_state(&ctx, id).open);
    }

    #[test]
    fn test_codec_change_rebuilds_state() {
        let ctx = egui::Context::default();
        let (_, id) = run_frame(&ctx, &january(), &PickerConfig::default());

        let config = PickerConfig {
            date_format: "%Y-%m-%d".to_string(),
            fallback_parsing: false,
            ..PickerConfig::default()
        };
        run_frame(&ctx, &january(), &config);

        // dd/MM/yyyy text no longer parses without the fallback
        let state = stored_state(&ctx, id);
        assert_eq!(state.controller.state(), RangeState::Uninitialized);
    }

    #[test]
    fn test_click_day_reconciles() {
        let mut state = PickerState::new(&january(), DateCodec::default());

        // Clicking the current start clears, then two clicks build February
        assert_eq!(state.click_day(ymd(2024, 1, 1)), None);
        assert_eq!(state.click_day(ymd(2024, 2, 1)), None);
        assert_eq!(
            state.click_day(ymd(2024, 2, 10)),
            Some(FormattedRange::new("01/02/2024", "10/02/2024"))
        );
    }

    #[test]
    fn test_click_day_same_range_is_silent() {
        let mut state = PickerState::new(&january(), DateCodec::default());

        // Collapse to 31 January, then rebuild 1..31 January
        assert_eq!(state.click_day(ymd(2024, 1, 31)), None);
        assert_eq!(state.click_day(ymd(2024, 1, 1)), None);
        assert_eq!(
            state.controller.internal(),
            InternalRange::between(ymd(2024, 1, 1), ymd(2024, 1, 31))
        );
    }

    #[test]
    fn test_builder_options() {
        let date = january();
        let picker = DateRangePicker::new("report_range", &date)
            .months(9)
            .min_width(160.0)
            .placeholder("Any time");
        assert_eq!(picker.config.months_shown, MAX_MONTHS_SHOWN);
        assert_eq!(picker.min_width, 160.0);
        assert_eq!(picker.placeholder, "Any time");
        assert_eq!(
            DateRangePicker::new("other", &date).min_width,
            sizing::TRIGGER_MIN_WIDTH
        );
    }

    #[test]
    fn test_toggle_and_navigate() {
        let mut state = PickerState::new(&january(), DateCodec::default());
        state.navigate(3);
        assert_eq!(state.view_month, ymd(2024, 4, 1));

        // Opening snaps back to the range start
        state.toggle();
        assert!(state.open);
        assert_eq!(state.view_month, ymd(2024, 1, 1));
    }

    #[test]
    fn test_labels() {
        let controller = DateRangeController::new(january());
        assert_eq!(
            range_label(&controller, DEFAULT_PLACEHOLDER),
            ("01/01/2024 - 31/01/2024".to_string(), false)
        );

        let empty = DateRangeController::new(ExternalDateRange::new("", ""));
        assert_eq!(
            range_label(&empty, "Any time"),
            ("Any time".to_string(), true)
        );

        assert_eq!(footer_text(controller.internal()), "31 days selected");
        assert_eq!(
            footer_text(InternalRange::new(Some(ymd(2024, 1, 1)), None)),
            "Select the end date"
        );
        assert_eq!(footer_text(InternalRange::EMPTY), "Select the start date");
    }
}
