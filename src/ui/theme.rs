// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the comparison widget.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_300, GRAY_400, GRAY_900, WHITE},
};
use iced::Color;

/// Divider line color.
pub fn handle_color() -> Color {
    WHITE
}

/// Soft shadow drawn on both sides of the divider line.
pub fn handle_shadow_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..BLACK
    }
}

/// Grip fill color.
pub fn grip_fill_color() -> Color {
    WHITE
}

/// Grip outline color.
pub fn grip_border_color() -> Color {
    GRAY_300
}

/// Color of the two bars inside the grip.
pub fn grip_bar_color() -> Color {
    GRAY_400
}

/// Surface shown where a layer has no image (loading or failed).
pub fn placeholder_surface_color() -> Color {
    GRAY_900
}

/// Background of the label chips and the caption.
pub fn chip_background_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grip_parts_are_distinguishable() {
        assert_ne!(grip_fill_color(), grip_border_color());
        assert_ne!(grip_fill_color(), grip_bar_color());
    }

    #[test]
    fn chip_background_is_translucent() {
        let color = chip_background_color();
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}
