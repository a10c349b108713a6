// SPDX-License-Identifier: MPL-2.0
//! PDFium adapter implementing the [`DocumentParser`] and [`DocumentHandle`]
//! port traits.
//!
//! # Design Notes
//!
//! - The PDFium library is bound once at startup and lives for the rest of
//!   the process, so parsed documents can borrow it with a `'static` lifetime
//! - Documents are not `Send`: parsing and rendering happen on the UI thread
//! - Page geometry comes straight from the page's media box in points
//!
//! [`DocumentParser`]: crate::application::port::DocumentParser
//! [`DocumentHandle`]: crate::application::port::DocumentHandle

use crate::application::port::{
    Bitmap, DocumentError, DocumentHandle, DocumentParser, SharedDocument,
};
use crate::domain::document::{DocumentId, PageNumber, PageSize, Viewport};
use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use std::path::Path;
use std::rc::Rc;

/// A bound PDFium library.
pub struct PdfiumEngine {
    pdfium: &'static Pdfium,
}

impl PdfiumEngine {
    /// Binds PDFium, trying in order:
    /// 1. `library_path` (a library file or the directory containing it)
    /// 2. the platform library name in the working directory
    /// 3. the system library
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`] when no candidate can be loaded.
    pub fn bind(library_path: Option<&Path>) -> Result<Self> {
        let bindings = match library_path {
            Some(path) => bind_configured(path).or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "configured PDFium library failed to load");
                bind_default()
            }),
            None => bind_default(),
        }
        .map_err(|err| Error::Engine(err.to_string()))?;

        tracing::info!("PDFium bound");
        // Parsed documents borrow the library until the process exits.
        let pdfium: &'static Pdfium = Box::leak(Box::new(Pdfium::new(bindings)));
        Ok(Self { pdfium })
    }
}

fn bind_configured(
    path: &Path,
) -> std::result::Result<Box<dyn PdfiumLibraryBindings>, PdfiumError> {
    let path_str = path.to_string_lossy().into_owned();
    if path.is_dir() {
        Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
            path_str.as_str(),
        ))
    } else {
        Pdfium::bind_to_library(path_str)
    }
}

fn bind_default() -> std::result::Result<Box<dyn PdfiumLibraryBindings>, PdfiumError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
}

impl DocumentParser for PdfiumEngine {
    fn parse(&self, bytes: Vec<u8>) -> std::result::Result<SharedDocument, DocumentError> {
        let size = bytes.len();
        let document = self
            .pdfium
            .load_pdf_from_byte_vec(bytes, None)
            .map_err(|err| DocumentError::Parse(err.to_string()))?;

        let page_count = document.pages().len();
        if page_count == 0 {
            return Err(DocumentError::Empty);
        }

        let id = DocumentId::next();
        tracing::info!(document = %id, pages = page_count, bytes = size, "parsed PDF");
        Ok(Rc::new(PdfiumDocument {
            id,
            document,
            page_count,
        }))
    }
}

/// A document parsed by PDFium.
pub struct PdfiumDocument {
    id: DocumentId,
    document: PdfDocument<'static>,
    page_count: u16,
}

impl PdfiumDocument {
    fn page(&self, page: PageNumber) -> std::result::Result<PdfPage<'static>, DocumentError> {
        self.check_page(page)?;
        self.document
            .pages()
            .get(page.index())
            .map_err(|err| DocumentError::Backend(err.to_string()))
    }
}

impl DocumentHandle for PdfiumDocument {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn page_count(&self) -> u16 {
        self.page_count
    }

    fn page_size(&self, page: PageNumber) -> std::result::Result<PageSize, DocumentError> {
        let pdf_page = self.page(page)?;
        Ok(PageSize::new(pdf_page.width().value, pdf_page.height().value))
    }

    fn render(
        &self,
        page: PageNumber,
        viewport: Viewport,
    ) -> std::result::Result<Bitmap, DocumentError> {
        let target = viewport.pixel_size();
        let pdf_page = self.page(page)?;

        // Both axes are fixed so the bitmap matches the viewport exactly.
        #[allow(clippy::cast_possible_wrap)]
        let config =
            PdfRenderConfig::new().set_fixed_size(target.width as Pixels, target.height as Pixels);

        let rgba = pdf_page
            .render_with_config(&config)
            .map_err(|err| DocumentError::Backend(err.to_string()))?
            .as_image()
            .to_rgba8();

        let (width, height) = (rgba.width(), rgba.height());
        Bitmap::from_raw(width, height, rgba.into_raw()).ok_or_else(|| {
            DocumentError::Backend(format!("bitmap buffer does not match {width}x{height}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn system_engine() -> PdfiumEngine {
        PdfiumEngine::bind(None).expect("PDFium library available")
    }

    /// Builds a one-page A4 document with PDFium itself.
    fn a4_pdf(engine: &PdfiumEngine) -> Vec<u8> {
        let mut document = engine.pdfium.create_new_pdf().expect("create document");
        document
            .pages_mut()
            .create_page_at_end(PdfPagePaperSize::a4())
            .expect("add page");
        document.save_to_bytes().expect("serialize document")
    }

    #[test]
    fn bind_with_missing_library_falls_back_or_reports_engine_error() {
        let bogus = Path::new("/nonexistent/pdfium/libpdfium.so");
        match PdfiumEngine::bind(Some(bogus)) {
            // A default library was found instead.
            Ok(_) => {}
            Err(err) => {
                assert!(matches!(err, Error::Engine(_)));
                assert_eq!(err.i18n_key(), "notification-engine-unavailable");
            }
        }
    }

    #[test]
    #[ignore = "requires the PDFium shared library"]
    fn garbage_bytes_fail_to_parse() {
        let engine = system_engine();
        let result = engine.parse(b"definitely not a pdf".to_vec());
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }

    #[test]
    #[ignore = "requires the PDFium shared library"]
    fn parsed_page_reports_geometry_in_points() {
        let engine = system_engine();
        let document = engine.parse(a4_pdf(&engine)).expect("parse generated PDF");

        assert_eq!(document.page_count(), 1);
        let size = document.page_size(PageNumber::FIRST).expect("page size");
        assert_abs_diff_eq!(size.width, 595.0, epsilon = 1.0);
        assert_abs_diff_eq!(size.height, 842.0, epsilon = 1.0);
    }

    #[test]
    #[ignore = "requires the PDFium shared library"]
    fn render_matches_viewport_pixel_size() {
        let engine = system_engine();
        let document = engine.parse(a4_pdf(&engine)).expect("parse generated PDF");
        let size = document.page_size(PageNumber::FIRST).expect("page size");

        for scale in [0.25, 0.5, 1.0] {
            let viewport = Viewport::unit(size).with_scale(scale);
            let bitmap = document
                .render(PageNumber::FIRST, viewport)
                .expect("render page");
            let expected = viewport.pixel_size();
            assert_eq!((bitmap.width(), bitmap.height()), (expected.width, expected.height));
        }
    }

    #[test]
    #[ignore = "requires the PDFium shared library"]
    fn page_past_the_end_is_rejected() {
        let engine = system_engine();
        let document = engine.parse(a4_pdf(&engine)).expect("parse generated PDF");
        let second = PageNumber::new(2).expect("non-zero page");
        assert!(matches!(
            document.page_size(second),
            Err(DocumentError::PageOutOfRange { page: 2, page_count: 1 })
        ));
    }
}
