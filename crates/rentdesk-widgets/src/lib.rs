//! egui widgets for the Rentdesk dashboard's date-range selection.
//!
//! - **Picker**: a trigger button with a dual-month calendar popup
//! - **Calendar**: a single month grid with range highlighting
//! - **Buttons**: the picker trigger and month navigation arrows
//! - **Frame / Layout**: popup frame, separators, section labels

pub mod buttons;
pub mod calendar;
pub mod date_range_picker;
pub mod frame;
pub mod layout;

pub use buttons::{NavButton, NavDirection, TriggerButton};
pub use calendar::{MonthView, MonthViewResponse};
pub use date_range_picker::DateRangePicker;
pub use frame::popup_frame;
pub use layout::{section_label, separator, vertical_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Side of a day cell in the month grid
    pub const DAY_CELL: f32 = 28.0;
    /// Month navigation button size
    pub const NAV: f32 = 24.0;
    /// Trigger button height
    pub const TRIGGER_HEIGHT: f32 = 32.0;
    /// Trigger button minimum width
    pub const TRIGGER_MIN_WIDTH: f32 = 220.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Popup corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Days outside the displayed month
    pub const TEXT_OUTSIDE: Color32 = Color32::from_rgb(190, 190, 190);
    /// Text drawn on the accent color
    pub const ON_ACCENT: Color32 = Color32::WHITE;
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Range endpoints, focus border, today marker (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Band behind days inside the selected range
    pub const RANGE_BG: Color32 = Color32::from_rgb(219, 234, 254);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Popup background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
