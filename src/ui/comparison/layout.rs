// SPDX-License-Identifier: MPL-2.0
//! Window chrome measurements and the pane surface size they leave.
//!
//! The widgets in [`super::pane`] and [`super::actions`] use these same
//! constants, so the bounds computed here match what is drawn.

use crate::app::config::MIN_SURFACE_EDGE;
use crate::domain::document::PixelSize;
use crate::ui::design_tokens::{sizing, spacing};
use iced::Size;

/// Padding around the whole window content.
pub const WINDOW_PADDING: f32 = spacing::MD;

/// Gap between the header and the panes, and between the three columns.
pub const SECTION_GAP: f32 = spacing::MD;

/// Padding inside a pane.
pub const PANE_PADDING: f32 = spacing::SM;

/// Gap between the rows of a pane.
pub const PANE_ROW_GAP: f32 = spacing::XS;

/// Horizontal space taken by everything except the two surfaces.
pub const HORIZONTAL_CHROME: f32 =
    2.0 * WINDOW_PADDING + 2.0 * SECTION_GAP + sizing::ACTION_COLUMN_WIDTH + 4.0 * PANE_PADDING;

/// Vertical space taken by everything except a surface.
pub const VERTICAL_CHROME: f32 = 2.0 * WINDOW_PADDING
    + sizing::HEADER_HEIGHT
    + SECTION_GAP
    + 2.0 * PANE_PADDING
    + sizing::PANE_TITLE_HEIGHT
    + sizing::BUTTON_HEIGHT
    + 2.0 * PANE_ROW_GAP;

/// Computes the shared surface bounds for a window of the given size.
///
/// Both panes split the width left over by the chrome; each edge is at least
/// [`MIN_SURFACE_EDGE`].
#[must_use]
pub fn surface_bounds_for_window(window: Size) -> PixelSize {
    let width = (window.width - HORIZONTAL_CHROME) / 2.0;
    let height = window.height - VERTICAL_CHROME;
    PixelSize::new(to_edge(width), to_edge(height))
}

/// Window size that fits two surfaces of `bounds` plus the chrome.
#[must_use]
pub fn window_size_for_surface(bounds: PixelSize) -> Size {
    Size::new(
        2.0 * bounds.width as f32 + HORIZONTAL_CHROME,
        bounds.height as f32 + VERTICAL_CHROME,
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_edge(value: f32) -> u32 {
    if !value.is_finite() || value <= MIN_SURFACE_EDGE as f32 {
        MIN_SURFACE_EDGE
    } else {
        value.floor() as u32
    }
}
