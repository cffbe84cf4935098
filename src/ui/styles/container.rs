// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use iced::widget::container;
use iced::{Background, Theme};

/// Toolbar strip above the scrollable page.
///
/// Derived from the active Iced `Theme` so it stays readable in both light
/// and dark modes without hard-coding colors.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Empty area above the widget in the showcase page; only the hint text shows.
pub fn lead_in(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        text_color: Some(palette.background.strong.color),
        ..Default::default()
    }
}
