// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (upload, send, approve).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme, status),
    }
}

/// Confirming action button (approve).
pub fn success(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active | button::Status::Pressed => palette::SUCCESS_500,
        button::Status::Hovered => palette::SUCCESS_400,
        button::Status::Disabled => return disabled(theme, status),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::SUCCESS_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Secondary button drawn with the theme's neutral colors (paging, re-run).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match status {
        button::Status::Hovered => palette.background.strong,
        button::Status::Pressed => palette.background.base,
        button::Status::Active => palette.background.weak,
        button::Status::Disabled => return disabled(theme, status),
    };

    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grayed out, non-interactive button.
pub fn disabled(theme: &Theme, _status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    button::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_color_when_active() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn disabled_state_is_shared_by_all_variants() {
        let theme = Theme::Dark;
        let expected = disabled(&theme, button::Status::Disabled).background;
        assert_eq!(primary(&theme, button::Status::Disabled).background, expected);
        assert_eq!(
            secondary(&theme, button::Status::Disabled).background,
            expected
        );
    }

    #[test]
    fn success_brightens_on_hover() {
        let theme = Theme::Light;
        assert_eq!(
            success(&theme, button::Status::Hovered).background,
            Some(Background::Color(palette::SUCCESS_400))
        );
    }

    #[test]
    fn secondary_hover_differs_from_active() {
        let theme = Theme::Light;
        let active = secondary(&theme, button::Status::Active).background;
        let hovered = secondary(&theme, button::Status::Hovered).background;
        assert_ne!(active, hovered);
    }
}
