// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`pdfium`]: PDF parsing and page rendering via PDFium (implements
//!   [`DocumentParser`] and [`DocumentHandle`])
//!
//! [`DocumentParser`]: crate::application::port::DocumentParser
//! [`DocumentHandle`]: crate::application::port::DocumentHandle

pub mod pdfium;

pub use pdfium::{PdfiumDocument, PdfiumEngine};
