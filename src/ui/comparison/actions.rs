// SPDX-License-Identifier: MPL-2.0
//! Action column between the two panes: re-run, send and approve.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, tooltip, Column, Container, Text};
use iced::{Element, Length, Theme};

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Renders the action column.
///
/// Re-run is always available; send and approve need a loaded document.
pub fn view(i18n: &I18n, has_document: bool) -> Element<'_, Message> {
    let rerun = action_button(
        i18n,
        "action-rerun",
        "action-rerun-tooltip",
        styles::button::secondary,
        Some(Message::Rerun),
    );
    let send = action_button(
        i18n,
        "action-send",
        "action-send-tooltip",
        styles::button::primary,
        has_document.then_some(Message::Send),
    );
    let approve = action_button(
        i18n,
        "action-approve",
        "action-approve-tooltip",
        styles::button::success,
        has_document.then_some(Message::Approve),
    );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(rerun)
            .push(send)
            .push(approve),
    )
    .width(Length::Fixed(sizing::ACTION_COLUMN_WIDTH))
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn action_button<'a>(
    i18n: &'a I18n,
    label_key: &str,
    tooltip_key: &str,
    style: ButtonStyle,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(label_key))
        .size(typography::BODY)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let control = button(label)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .style(if on_press.is_some() {
            style
        } else {
            styles::button::disabled
        })
        .on_press_maybe(on_press);

    tooltip(
        control,
        text(i18n.tr(tooltip_key)).size(typography::CAPTION),
        tooltip::Position::Left,
    )
    .into()
}
