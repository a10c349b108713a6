// SPDX-License-Identifier: MPL-2.0
//! Document domain types.

pub mod newtypes;

pub use newtypes::{DocumentId, PageNumber, PageSize, PixelSize, Viewport};
