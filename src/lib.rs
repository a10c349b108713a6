// SPDX-License-Identifier: MPL-2.0
//! `pdf_compare` is a desktop viewer that shows an uploaded PDF next to its
//! processed counterpart, built with the Iced GUI framework.
//!
//! Both panes share one page cursor and are rendered through PDFium to fit a
//! common surface. The crate also carries Fluent localization, user
//! preferences in `settings.toml`, and toast notifications.

#![doc(html_root_url = "https://docs.rs/pdf_compare/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
