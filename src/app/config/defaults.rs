// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Surface**: Initial and minimum pane drawing surface size
//! - **Notifications**: Toast auto-dismiss timing

// ==========================================================================
// Surface Defaults
// ==========================================================================

/// Default width of each pane's drawing surface, in pixels.
pub const DEFAULT_SURFACE_WIDTH: u32 = 560;

/// Default height of each pane's drawing surface, in pixels.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 720;

/// Smallest surface edge accepted from config or window resizes.
pub const MIN_SURFACE_EDGE: u32 = 64;

/// Largest surface edge accepted from config.
pub const MAX_SURFACE_EDGE: u32 = 8192;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success and info toasts (milliseconds).
pub const DEFAULT_TOAST_MS: u64 = 3000;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const WARNING_TOAST_MS: u64 = 5000;

/// Clamps a configured surface edge into the accepted range.
#[must_use]
pub fn clamp_surface_edge(value: u32) -> u32 {
    value.clamp(MIN_SURFACE_EDGE, MAX_SURFACE_EDGE)
}
