// SPDX-License-Identifier: MPL-2.0
//! Comparison screen: the original pane, the action column and the
//! processed pane side by side under a header.
//!
//! The screen is stateless. It reads the comparison state through
//! [`ViewContext`] and reports user intent as [`Message`]s.

pub mod actions;
pub mod layout;
pub mod pane;

use crate::application::comparison::Slot;
use crate::application::query::NavigationInfo;
use crate::domain::document::PixelSize;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};
use layout::{SECTION_GAP, WINDOW_PADDING};

/// User intent emitted by the comparison screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Upload,
    PreviousPage,
    NextPage,
    Rerun,
    Send,
    Approve,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub bounds: PixelSize,
    pub navigation: NavigationInfo,
}

/// What each pane currently shows.
#[derive(Default)]
pub struct ViewModel<'a> {
    pub original: Option<(&'a Handle, PixelSize)>,
    pub processed: Option<(&'a Handle, PixelSize)>,
}

impl<'a> ViewModel<'a> {
    fn page(&self, slot: Slot) -> Option<(&'a Handle, PixelSize)> {
        match slot {
            Slot::Original => self.original,
            Slot::Processed => self.processed,
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Message> {
    let has_document = ctx.navigation.has_document;
    let pane_ctx = pane::ViewContext {
        i18n: ctx.i18n,
        bounds: ctx.bounds,
        navigation: ctx.navigation,
    };
    let pane_view = |slot: Slot| {
        pane::view(
            &pane_ctx,
            pane::ViewModel {
                slot,
                has_document,
                page: model.page(slot),
            },
        )
    };

    let header = Container::new(Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let body = Row::new()
        .spacing(SECTION_GAP)
        .push(pane_view(Slot::Original))
        .push(actions::view(ctx.i18n, has_document))
        .push(pane_view(Slot::Processed));

    Container::new(
        Column::new()
            .spacing(SECTION_GAP)
            .align_x(Horizontal::Center)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(WINDOW_PADDING)
    .align_x(Horizontal::Center)
    .into()
}
