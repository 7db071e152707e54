//! Button components: the picker trigger and month navigation arrows.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, Id, Pos2, Rect, Sense, Stroke, StrokeKind, Ui,
};

use crate::{sizing, theme};

/// Button that shows the current range and opens the calendar popup.
pub struct TriggerButton<'a> {
    label: &'a str,
    muted: bool,
    active: bool,
    min_width: f32,
    height: f32,
    font_size: f32,
}

impl<'a> TriggerButton<'a> {
    /// Create a new trigger button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            muted: false,
            active: false,
            min_width: sizing::TRIGGER_MIN_WIDTH,
            height: sizing::TRIGGER_HEIGHT,
            font_size: 13.0,
        }
    }

    /// Draw the label in the muted color (placeholder text).
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Highlight the border while the popup is open.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }

    /// Show the button. Returns whether it was clicked and its rect, which
    /// anchors the popup.
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER, // Color doesn't matter for sizing
        );
        let icon_space = 30.0;
        let width = (galley.size().x + icon_space + 12.0).max(self.min_width);
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::WHITE
            };
            let border = if self.active {
                theme::ACCENT
            } else {
                theme::BORDER
            };
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);

            ui.painter().rect_filled(rect, radius, bg_color);
            ui.painter()
                .rect_stroke(rect, radius, Stroke::new(1.0, border), StrokeKind::Inside);

            let icon_rect =
                Rect::from_center_size(Pos2::new(rect.left() + 16.0, rect.center().y), vec2(12.0, 12.0));
            paint_calendar_glyph(ui, icon_rect, theme::TEXT_MUTED);

            let text_color = if self.muted {
                theme::TEXT_MUTED
            } else {
                theme::TEXT
            };
            ui.painter().text(
                Pos2::new(rect.left() + icon_space, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Small calendar page outline.
fn paint_calendar_glyph(ui: &Ui, rect: Rect, color: Color32) {
    let stroke = Stroke::new(1.2, color);
    ui.painter()
        .rect_stroke(rect, CornerRadius::same(2), stroke, StrokeKind::Inside);
    let y = rect.top() + rect.height() * 0.3;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        stroke,
    );
}

/// Direction of a month navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    /// Month offset applied when clicked.
    pub fn delta(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }

    fn tooltip(self) -> &'static str {
        match self {
            Self::Previous => "Previous month",
            Self::Next => "Next month",
        }
    }
}

/// Chevron button stepping the visible month.
pub struct NavButton {
    direction: NavDirection,
}

impl NavButton {
    /// Create a navigation button.
    pub fn new(direction: NavDirection) -> Self {
        Self { direction }
    }

    /// Show the button inside `rect` and return true if clicked.
    pub fn show_at(self, ui: &mut Ui, rect: Rect, id: Id) -> bool {
        let response = ui.interact(rect, id, Sense::click());

        if ui.is_rect_visible(rect) {
            if response.hovered() {
                ui.painter().rect_filled(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    theme::HOVER_BG,
                );
            }

            let color = if response.hovered() {
                theme::TEXT
            } else {
                theme::TEXT_MUTED
            };
            let c = rect.center();
            let dx = match self.direction {
                NavDirection::Previous => 2.0,
                NavDirection::Next => -2.0,
            };
            let tip = Pos2::new(c.x - dx, c.y);
            let stroke = Stroke::new(1.5, color);
            ui.painter()
                .line_segment([Pos2::new(c.x + dx, c.y - 4.0), tip], stroke);
            ui.painter()
                .line_segment([tip, Pos2::new(c.x + dx, c.y + 4.0)], stroke);
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.direction.tooltip())
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_delta() {
        assert_eq!(NavDirection::Previous.delta(), -1);
        assert_eq!(NavDirection::Next.delta(), 1);
    }
}
