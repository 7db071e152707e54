//! Frames for floating picker content.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::{sizing, theme};

const POPUP_SHADOW_ALPHA: u8 = 28;

/// Frame for the calendar popup, drawn over page content.
pub fn popup_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 16,
            offset: [0, 4],
            color: Color32::from_black_alpha(POPUP_SHADOW_ALPHA),
        })
        .inner_margin(Margin::symmetric(12, 10))
}
