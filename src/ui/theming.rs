// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the comparison panes draw with, on top of the iced theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Backdrop behind a rendered page.
    pub surface_backdrop: Color,
    /// Pane frame.
    pub surface_border: Color,
    /// Placeholder and hint text.
    pub text_muted: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_backdrop: palette::GRAY_100,
            surface_border: palette::GRAY_200,
            text_muted: palette::GRAY_700,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_backdrop: Color::from_rgb(0.15, 0.15, 0.15),
            surface_border: palette::GRAY_700,
            text_muted: palette::GRAY_200,
        }
    }

    /// Picks the scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark unless the system positively reports light.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Resolves the mode into the iced theme for the window.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_differ_by_brightness() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.surface_backdrop.r > dark.surface_backdrop.r);
    }

    #[test]
    fn for_theme_follows_iced_palette() {
        assert_eq!(
            ColorScheme::for_theme(&Theme::Dark).surface_backdrop,
            ColorScheme::dark().surface_backdrop
        );
        assert_eq!(
            ColorScheme::for_theme(&Theme::Light).surface_backdrop,
            ColorScheme::light().surface_backdrop
        );
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the desktop; only check it doesn't panic.
        let _ = ThemeMode::System.iced_theme();
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }
}
