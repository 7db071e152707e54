//! Single-month calendar view with range highlighting.

use chrono::{Datelike, NaiveDate};
use egui::{
    pos2, vec2, Align2, CornerRadius, CursorIcon, FontId, Id, Rect, Sense, Stroke, StrokeKind, Ui,
};
use rentdesk_core::{InternalRange, MonthGrid};

use crate::buttons::{NavButton, NavDirection};
use crate::{sizing, theme};

/// What happened in a month view this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthViewResponse {
    /// Day the user clicked, if any.
    pub clicked: Option<NaiveDate>,
    /// Month offset requested by a navigation button (0 when none).
    pub navigate: i32,
}

/// One month of the picker: title row, weekday header, day grid.
pub struct MonthView<'a> {
    id: Id,
    grid: &'a MonthGrid,
    range: InternalRange,
    today: NaiveDate,
    show_outside_days: bool,
    prev_button: bool,
    next_button: bool,
}

impl<'a> MonthView<'a> {
    /// Create a view of `grid` highlighting `range`.
    pub fn new(id: Id, grid: &'a MonthGrid, range: InternalRange, today: NaiveDate) -> Self {
        Self {
            id,
            grid,
            range,
            today,
            show_outside_days: true,
            prev_button: false,
            next_button: false,
        }
    }

    /// Draw (and allow clicking) days of the neighbouring months.
    pub fn show_outside_days(mut self, show: bool) -> Self {
        self.show_outside_days = show;
        self
    }

    /// Put navigation arrows in the title row.
    pub fn navigation(mut self, prev: bool, next: bool) -> Self {
        self.prev_button = prev;
        self.next_button = next;
        self
    }

    pub fn width() -> f32 {
        sizing::DAY_CELL * 7.0
    }

    pub fn show(self, ui: &mut Ui) -> MonthViewResponse {
        let mut out = MonthViewResponse::default();

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = vec2(0.0, 0.0);

            // Title row
            let (title_rect, _) =
                ui.allocate_exact_size(vec2(Self::width(), sizing::NAV), Sense::hover());
            ui.painter().text(
                title_rect.center(),
                Align2::CENTER_CENTER,
                self.grid.title(),
                FontId::proportional(13.0),
                theme::TEXT,
            );
            let nav_size = vec2(sizing::NAV, sizing::NAV);
            if self.prev_button {
                let rect = Rect::from_min_size(title_rect.min, nav_size);
                if NavButton::new(NavDirection::Previous).show_at(ui, rect, self.id.with("prev")) {
                    out.navigate = NavDirection::Previous.delta();
                }
            }
            if self.next_button {
                let rect = Rect::from_min_size(
                    pos2(title_rect.right() - sizing::NAV, title_rect.top()),
                    nav_size,
                );
                if NavButton::new(NavDirection::Next).show_at(ui, rect, self.id.with("next")) {
                    out.navigate = NavDirection::Next.delta();
                }
            }
            ui.add_space(4.0);

            // Weekday header
            ui.horizontal(|ui| {
                for label in self.grid.week_start.day_labels() {
                    let (rect, _) =
                        ui.allocate_exact_size(vec2(sizing::DAY_CELL, 18.0), Sense::hover());
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        label,
                        FontId::proportional(10.0),
                        theme::TEXT_MUTED,
                    );
                }
            });

            for week in &self.grid.weeks {
                ui.horizontal(|ui| {
                    for day in &week.days {
                        if !day.in_month && !self.show_outside_days {
                            ui.allocate_exact_size(
                                vec2(sizing::DAY_CELL, sizing::DAY_CELL),
                                Sense::hover(),
                            );
                            continue;
                        }
                        if self.day_cell(ui, day.date, day.in_month) {
                            out.clicked = Some(day.date);
                        }
                    }
                });
            }
        });

        out
    }

    fn day_cell(&self, ui: &mut Ui, date: NaiveDate, in_month: bool) -> bool {
        let size = vec2(sizing::DAY_CELL, sizing::DAY_CELL);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            let is_endpoint = self.range.is_endpoint(date);

            // Band between the endpoints, running into the endpoint cells
            if let Some((from, to)) = self.range.endpoints() {
                let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
                if lo < date && date < hi {
                    painter.rect_filled(rect, CornerRadius::ZERO, theme::RANGE_BG);
                } else if lo != hi && date == lo {
                    let half = Rect::from_min_max(pos2(rect.center().x, rect.top()), rect.max);
                    painter.rect_filled(half, CornerRadius::ZERO, theme::RANGE_BG);
                } else if lo != hi && date == hi {
                    let half = Rect::from_min_max(rect.min, pos2(rect.center().x, rect.bottom()));
                    painter.rect_filled(half, CornerRadius::ZERO, theme::RANGE_BG);
                }
            }

            if is_endpoint {
                painter.rect_filled(rect.shrink(1.0), radius, theme::ACCENT);
            } else if response.hovered() {
                painter.rect_filled(rect.shrink(1.0), radius, theme::HOVER_BG);
            }

            if date == self.today && !is_endpoint {
                painter.rect_stroke(
                    rect.shrink(2.0),
                    radius,
                    Stroke::new(1.0, theme::ACCENT),
                    StrokeKind::Inside,
                );
            }

            let text_color = if is_endpoint {
                theme::ON_ACCENT
            } else if !in_month {
                theme::TEXT_OUTSIDE
            } else {
                theme::TEXT
            };
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                date.day().to_string(),
                FontId::proportional(12.0),
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
