// SPDX-License-Identifier: MPL-2.0
//! Document engine port definition.
//!
//! This module defines the [`DocumentHandle`] and [`DocumentParser`] traits.
//! The PDF engine adapter in `infrastructure::pdfium` implements them; tests
//! supply in-memory fakes.
//!
//! Handles are shared between the two comparison slots through
//! [`SharedDocument`]. They are replaced on every upload and never mutated.

use crate::domain::document::{DocumentId, PageNumber, PageSize, Viewport};
use std::rc::Rc;
use thiserror::Error;

/// RGBA8 bitmap produced by a page render.
pub type Bitmap = image_rs::RgbaImage;

/// A parsed document shared by both display slots.
pub type SharedDocument = Rc<dyn DocumentHandle>;

// =============================================================================
// DocumentError
// =============================================================================

/// Errors raised while parsing or reading a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The bytes are not a readable document.
    #[error("cannot parse document: {0}")]
    Parse(String),

    /// The document parsed but has no pages.
    #[error("document has no pages")]
    Empty,

    /// A page outside `1..=page_count` was requested.
    #[error("page {page} is out of range (document has {page_count} pages)")]
    PageOutOfRange { page: u16, page_count: u16 },

    /// The engine failed while handling a valid request.
    #[error("document engine failure: {0}")]
    Backend(String),
}

impl DocumentError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentError::Parse(_) => "notification-parse-error",
            DocumentError::Empty => "notification-empty-document",
            DocumentError::PageOutOfRange { .. } | DocumentError::Backend(_) => {
                "notification-render-error"
            }
        }
    }
}

// =============================================================================
// DocumentHandle
// =============================================================================

/// Opaque reference to a parsed multi-page document.
pub trait DocumentHandle {
    /// Identity assigned when the document was parsed.
    fn id(&self) -> DocumentId;

    /// Number of pages; always at least 1 for a handle produced by a parser.
    fn page_count(&self) -> u16;

    /// Page geometry at unit scale.
    fn page_size(&self, page: PageNumber) -> Result<PageSize, DocumentError>;

    /// Draws `page` at the geometry described by `viewport`.
    ///
    /// The returned bitmap has the dimensions of `viewport.pixel_size()`.
    fn render(&self, page: PageNumber, viewport: Viewport) -> Result<Bitmap, DocumentError>;

    /// Checks `page` against the page count.
    fn check_page(&self, page: PageNumber) -> Result<(), DocumentError> {
        let page_count = self.page_count();
        if page.get() > page_count {
            return Err(DocumentError::PageOutOfRange {
                page: page.get(),
                page_count,
            });
        }
        Ok(())
    }
}

// =============================================================================
// DocumentParser
// =============================================================================

/// Port for turning raw file contents into a document handle.
pub trait DocumentParser {
    /// Parses `bytes` into a handle with at least one page.
    fn parse(&self, bytes: Vec<u8>) -> Result<SharedDocument, DocumentError>;
}
