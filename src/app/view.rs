// SPDX-License-Identifier: MPL-2.0
//! Window layout: a toolbar above a scrollable page that holds the optional
//! lead-in block and either the comparison widget or the image pickers.

use super::{App, Message};
use crate::ui::comparison::Side;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{alignment, Element, Length};

fn toolbar(app: &App) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .push(text(app.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    if let Some(key) = &app.notice {
        row = row.push(
            text(app.i18n.tr(key))
                .size(typography::CAPTION)
                .color(theme::error_text_color()),
        );
    }

    if let Some(state) = app.comparison() {
        if state.demo().is_enabled() && state.demo().has_played() {
            row = row.push(
                text(app.i18n.tr("toolbar-replay-hint"))
                    .size(typography::CAPTION)
                    .color(theme::muted_text_color()),
            );
        }
    }

    if app.before.is_some() && app.after.is_some() {
        let key = if app.comparison.is_some() {
            "toolbar-hide-slider"
        } else {
            "toolbar-show-slider"
        };
        row = row.push(
            button(text(app.i18n.tr(key)).size(typography::BODY))
                .style(button::secondary)
                .on_press(Message::ToggleSlider),
        );
    }

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}

fn lead_in(app: &App) -> Element<'_, Message> {
    container(text(app.i18n.tr("lead-in-hint")).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(app.lead_in))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .style(styles::container::lead_in)
        .into()
}

fn pickers(app: &App) -> Element<'_, Message> {
    let pick = |side: Side, key: &str, chosen: bool| {
        let mut picker = button(text(app.i18n.tr(key)).size(typography::BODY));
        picker = if chosen {
            picker.style(button::success)
        } else {
            picker.style(button::primary)
        };
        picker.on_press(Message::PickImage(side))
    };

    let buttons = Row::new()
        .spacing(spacing::MD)
        .push(pick(Side::Before, "picker-choose-before", app.before.is_some()))
        .push(pick(Side::After, "picker-choose-after", app.after.is_some()));

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(text(app.i18n.tr("picker-title")).size(typography::TITLE_MD))
        .push(buttons)
        .into()
}

pub fn view(app: &App) -> Element<'_, Message> {
    let mut page = Column::new()
        .padding(spacing::LG)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    if app.lead_in > 0.0 {
        page = page.push(lead_in(app));
    }

    page = match (&app.comparison, app.before.is_some() && app.after.is_some()) {
        (Some(state), _) => page.push(state.view(&app.i18n).map(Message::Comparison)),
        (None, true) => page,
        (None, false) => page.push(pickers(app)),
    };

    // Room to scroll the slider back out of view.
    page = page.push(Space::new().height(Length::Fixed(app.lead_in)));

    let body = scrollable(container(page).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset: viewport.absolute_offset().y,
            height: viewport.bounds().height,
        });

    Column::new().push(toolbar(app)).push(body).into()
}
