// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and in-memory documents.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! and provides fakes for the document ports so tests never need the PDF engine.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{
    Bitmap, DocumentError, DocumentHandle, DocumentParser, DocumentSink, SharedDocument,
    SinkError,
};
use crate::domain::document::{DocumentId, PageNumber, PageSize, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// US Letter in points.
pub const LETTER: PageSize = PageSize {
    width: 612.0,
    height: 792.0,
};

/// In-memory document that renders blank pages and counts render calls.
#[derive(Debug)]
pub struct FakeDocument {
    id: DocumentId,
    sizes: Vec<PageSize>,
    renders: Cell<usize>,
}

impl FakeDocument {
    pub fn with_sizes(sizes: Vec<PageSize>) -> Self {
        Self {
            id: DocumentId::next(),
            sizes,
            renders: Cell::new(0),
        }
    }

    /// A document of `pages` US Letter pages.
    pub fn letter(pages: u16) -> Self {
        Self::with_sizes(vec![LETTER; usize::from(pages)])
    }

    pub fn shared(pages: u16) -> Rc<FakeDocument> {
        Rc::new(Self::letter(pages))
    }

    /// Number of `render` calls so far.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

impl DocumentHandle for FakeDocument {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn page_count(&self) -> u16 {
        u16::try_from(self.sizes.len()).unwrap_or(u16::MAX)
    }

    fn page_size(&self, page: PageNumber) -> Result<PageSize, DocumentError> {
        self.check_page(page)?;
        Ok(self.sizes[usize::from(page.index())])
    }

    fn render(&self, page: PageNumber, viewport: Viewport) -> Result<Bitmap, DocumentError> {
        self.check_page(page)?;
        self.renders.set(self.renders.get() + 1);
        let size = viewport.pixel_size();
        Ok(Bitmap::from_pixel(
            size.width,
            size.height,
            image_rs::Rgba([255, 255, 255, 255]),
        ))
    }
}

/// Parser that accepts any bytes starting with `%PDF` and yields
/// `pages` letter pages; a zero page count reports an empty document.
#[derive(Debug)]
pub struct FakeParser {
    pub pages: u16,
}

impl DocumentParser for FakeParser {
    fn parse(&self, bytes: Vec<u8>) -> Result<SharedDocument, DocumentError> {
        if !bytes.starts_with(b"%PDF") {
            return Err(DocumentError::Parse("missing %PDF header".into()));
        }
        if self.pages == 0 {
            return Err(DocumentError::Empty);
        }
        Ok(Rc::new(FakeDocument::letter(self.pages)))
    }
}

/// Sink that remembers which documents it was handed.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub submitted: RefCell<Vec<DocumentId>>,
    pub approved: RefCell<Vec<DocumentId>>,
}

impl DocumentSink for RecordingSink {
    fn submit(&self, document: &dyn DocumentHandle) -> Result<(), SinkError> {
        self.submitted.borrow_mut().push(document.id());
        Ok(())
    }

    fn approve(&self, document: &dyn DocumentHandle) -> Result<(), SinkError> {
        self.approved.borrow_mut().push(document.id());
        Ok(())
    }
}
