// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side state shared by the views).

pub mod navigation;

pub use navigation::{NavigationInfo, PageNavigator};
