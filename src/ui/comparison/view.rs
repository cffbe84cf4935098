// SPDX-License-Identifier: MPL-2.0
//! Layout of the comparison widget: the canvas at the bottom of a stack,
//! with labels, caption and load status drawn above it.

use super::{ComparisonCanvas, LayerStatus, Message, Side, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{container, text, Canvas, Column, Row, Space, Stack};
use iced::{Element, Length};

fn chip<'a>(content: String) -> Element<'a, Message> {
    container(text(content).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::chip(radius::SM))
        .into()
}

fn ready(status: &LayerStatus) -> Option<&crate::media::ImageData> {
    match status {
        LayerStatus::Ready(image) => Some(image),
        _ => None,
    }
}

/// One line per layer that is not ready yet.
fn status_lines<'a>(state: &State, i18n: &I18n) -> Option<Element<'a, Message>> {
    let mut lines = Column::new().spacing(spacing::XXS);
    let mut any = false;
    for side in [Side::Before, Side::After] {
        let label = state.label(side, i18n);
        let line = match state.layer(side) {
            LayerStatus::Ready(_) => continue,
            LayerStatus::Loading => text(format!("{label}: {}", i18n.tr("layer-loading")))
                .size(typography::BODY)
                .color(theme::muted_text_color()),
            LayerStatus::Failed(err) => text(format!("{label}: {}", i18n.tr(err.i18n_key())))
                .size(typography::BODY)
                .color(theme::error_text_color()),
        };
        lines = lines.push(line);
        any = true;
    }
    any.then(|| {
        container(lines)
            .padding(spacing::XS)
            .style(styles::overlay::chip(radius::SM))
            .into()
    })
}

pub(super) fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let canvas = Canvas::new(ComparisonCanvas {
        before: ready(&state.before),
        after: ready(&state.after),
        position: state.position(),
        dragging: state.is_dragging(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    // The "after" layer sits on the left of the divider.
    let labels = Row::new()
        .push(chip(state.label(Side::After, i18n)))
        .push(Space::new().width(Length::Fill))
        .push(chip(state.label(Side::Before, i18n)));

    let mut overlay = Column::new()
        .padding(spacing::SM)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(labels)
        .push(Space::new().height(Length::Fill));

    if let Some(status) = status_lines(state, i18n) {
        overlay = overlay
            .push(container(status).center_x(Length::Fill))
            .push(Space::new().height(Length::Fill));
    }

    overlay = overlay.push(container(chip(i18n.tr("instruction-caption"))).center_x(Length::Fill));

    let stack = Stack::new()
        .push(canvas)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fixed(state.config().height));

    container(stack)
        .style(styles::overlay::frame(radius::MD))
        .clip(true)
        .into()
}
