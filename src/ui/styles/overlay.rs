// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the label chips and instruction caption.

use crate::ui::design_tokens::{border, opacity, palette::WHITE};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Dark translucent chip used for the "before"/"after" labels and the caption.
pub fn chip(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(theme::chip_background_color())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: border::WIDTH_SM,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Frame around the whole comparison container.
pub fn frame(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            border: Border {
                color: palette.background.strong.color,
                width: border::WIDTH_SM,
                radius: rad.into(),
            },
            ..Default::default()
        }
    }
}
