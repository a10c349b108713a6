// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! application state and return widgets that emit messages.
//!
//! - [`comparison`] - The two-pane comparison screen and its action column
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod comparison;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
