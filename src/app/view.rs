// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The comparison screen fills the window; toasts float above it.

use super::{Message, PageImages};
use crate::application::comparison::Slot;
use crate::application::query::NavigationInfo;
use crate::domain::document::PixelSize;
use crate::i18n::fluent::I18n;
use crate::ui::comparison;
use crate::ui::notifications::{self, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub bounds: PixelSize,
    pub navigation: NavigationInfo,
    pub pages: &'a PageImages,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let pages = ctx.pages;
    let page = |slot: Slot| pages.get(slot).map(|image| (&image.handle, image.size));

    let screen = comparison::view(
        comparison::ViewContext {
            i18n: ctx.i18n,
            bounds: ctx.bounds,
            navigation: ctx.navigation,
        },
        comparison::ViewModel {
            original: page(Slot::Original),
            processed: page(Slot::Processed),
        },
    )
    .map(Message::Comparison);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(toasts)
        .into()
}
