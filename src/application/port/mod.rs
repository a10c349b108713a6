// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The comparison state only talks to these traits, never to the PDF engine
//! directly.
//!
//! # Available Ports
//!
//! - [`document`]: Document parsing, page geometry and page rendering
//! - [`sink`]: Destination for the "send" and "approve" actions
//!
//! # Design Notes
//!
//! - Handles are not `Send`: the PDF engine is bound to the UI thread
//! - Methods return `Result` with port-specific error types
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod document;
pub mod sink;

pub use document::{Bitmap, DocumentError, DocumentHandle, DocumentParser, SharedDocument};
pub use sink::{DocumentSink, LogSink, SinkError};
