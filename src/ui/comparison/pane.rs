// SPDX-License-Identifier: MPL-2.0
//! One comparison pane: title, paging row and the page surface.

use super::layout::{PANE_PADDING, PANE_ROW_GAP};
use super::Message;
use crate::application::comparison::Slot;
use crate::application::query::NavigationInfo;
use crate::domain::document::PixelSize;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, text, tooltip, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Fixed size of the drawing surface.
    pub bounds: PixelSize,
    pub navigation: NavigationInfo,
}

pub struct ViewModel<'a> {
    pub slot: Slot,
    pub has_document: bool,
    /// Last successfully rendered page, with its pixel size.
    pub page: Option<(&'a Handle, PixelSize)>,
}

pub fn view<'a>(ctx: &ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Message> {
    let title = Container::new(
        Text::new(ctx.i18n.tr(model.slot.title_key())).size(typography::TITLE_SM),
    )
    .height(Length::Fixed(sizing::PANE_TITLE_HEIGHT))
    .align_y(Vertical::Center);

    let surface_content: Element<'a, Message> = match (model.page, model.has_document) {
        (Some((handle, size)), true) => Image::new(handle.clone())
            .width(Length::Fixed(size.width as f32))
            .height(Length::Fixed(size.height as f32))
            .into(),
        (_, true) => Text::new("").into(),
        (_, false) => empty_surface(ctx.i18n, model.slot),
    };

    let surface = Container::new(surface_content)
        .width(Length::Fixed(ctx.bounds.width as f32))
        .height(Length::Fixed(ctx.bounds.height as f32))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::page_surface);

    Container::new(
        Column::new()
            .spacing(PANE_ROW_GAP)
            .push(title)
            .push(navigation_row(ctx))
            .push(surface),
    )
    .padding(PANE_PADDING)
    .style(styles::container::panel)
    .into()
}

fn navigation_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let nav = ctx.navigation;

    let previous = nav_button(
        ctx.i18n,
        "‹",
        "nav-previous-tooltip",
        nav.can_go_previous().then_some(Message::PreviousPage),
    );
    let next = nav_button(
        ctx.i18n,
        "›",
        "nav-next-tooltip",
        nav.can_go_next().then_some(Message::NextPage),
    );

    let counter = ctx.i18n.tr_with_args(
        "page-counter",
        &[
            ("current", &nav.current.get().to_string()),
            ("total", &nav.page_count.to_string()),
        ],
    );

    Row::new()
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .width(Length::Fixed(ctx.bounds.width as f32))
        .align_y(Vertical::Center)
        .push(previous)
        .push(
            Container::new(Text::new(counter).size(typography::BODY))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(next)
        .into()
}

fn nav_button<'a>(
    i18n: &'a I18n,
    label: &'a str,
    tooltip_key: &str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if on_press.is_some() {
        styles::button::secondary
    } else {
        styles::button::disabled
    };
    let control = button(text(label).size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press_maybe(on_press);

    tooltip(
        control,
        text(i18n.tr(tooltip_key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

fn empty_surface<'a>(i18n: &'a I18n, slot: Slot) -> Element<'a, Message> {
    let muted = |theme: &Theme| text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    };

    match slot {
        Slot::Original => {
            let upload = button(Text::new(i18n.tr("upload-button")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Upload);

            Column::new()
                .spacing(spacing::SM)
                .padding(spacing::MD)
                .align_x(Horizontal::Center)
                .push(upload)
                .push(
                    Text::new(i18n.tr("upload-hint"))
                        .size(typography::CAPTION)
                        .style(muted),
                )
                .into()
        }
        Slot::Processed => Container::new(
            Text::new(i18n.tr("processed-placeholder"))
                .size(typography::BODY)
                .style(muted),
        )
        .padding(spacing::MD)
        .into(),
    }
}
