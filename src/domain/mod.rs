// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by the application and UI
//! layers. It depends only on `std` so it stays trivially testable.
//!
//! # Modules
//!
//! - [`document`]: Document types ([`PageNumber`](document::PageNumber),
//!   [`PageSize`](document::PageSize), [`Viewport`](document::Viewport),
//!   [`PixelSize`](document::PixelSize), [`DocumentId`](document::DocumentId))

pub mod document;
