// SPDX-License-Identifier: MPL-2.0
//! Page rendering onto fixed-size drawing surfaces.
//!
//! A [`Surface`] has fixed `bounds` (the box the page must fit in) and a
//! `pixel_size` that follows the last rendered page. [`render_page`] computes
//! the uniform fit scale from the bounds, resizes the surface to the scaled
//! page and stores the bitmap.

use super::port::{Bitmap, DocumentError, DocumentHandle};
use crate::domain::document::{DocumentId, PageNumber, PageSize, PixelSize, Viewport};
use thiserror::Error;

/// Errors raised while rendering a page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The page reports a zero, negative or non-finite size.
    #[error("page {page} has unusable geometry {width}x{height}")]
    InvalidGeometry { page: u16, width: f32, height: f32 },

    /// The surface bounds have no area.
    #[error("drawing surface has no area")]
    EmptySurface,

    /// The document engine failed.
    #[error(transparent)]
    Backend(#[from] DocumentError),
}

/// Inputs a slot was last rendered from.
///
/// The render effect re-runs only when this key changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub document: DocumentId,
    pub bounds: PixelSize,
    pub page: PageNumber,
}

/// Fixed-size drawing target for one slot.
#[derive(Debug, Clone)]
pub struct Surface {
    bounds: PixelSize,
    pixel_size: PixelSize,
    bitmap: Option<Bitmap>,
}

impl Surface {
    /// Creates an empty surface whose pages must fit `bounds`.
    #[must_use]
    pub fn new(bounds: PixelSize) -> Self {
        Self {
            bounds,
            pixel_size: bounds,
            bitmap: None,
        }
    }

    /// The box rendered pages are fitted into.
    #[must_use]
    pub fn bounds(&self) -> PixelSize {
        self.bounds
    }

    /// Changes the fit box. The current bitmap stays until the next render.
    pub fn set_bounds(&mut self, bounds: PixelSize) {
        self.bounds = bounds;
    }

    /// Pixel dimensions after the last render.
    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    /// The last drawn bitmap, if any.
    #[must_use]
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    /// Drops the bitmap and restores the pixel size to the bounds.
    pub fn clear(&mut self) {
        self.bitmap = None;
        self.pixel_size = self.bounds;
    }

    fn draw(&mut self, viewport: Viewport, bitmap: Bitmap) {
        self.pixel_size = viewport.pixel_size();
        self.bitmap = Some(bitmap);
    }
}

/// Uniform scale that fits `page` entirely inside `bounds` without distortion.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fit_scale(bounds: PixelSize, page: PageSize) -> f32 {
    let scale_x = bounds.width as f32 / page.width;
    let scale_y = bounds.height as f32 / page.height;
    scale_x.min(scale_y)
}

/// Renders `page` of `document` onto `surface`.
///
/// On failure the surface keeps its previous content.
pub fn render_page(
    document: &dyn DocumentHandle,
    surface: &mut Surface,
    page: PageNumber,
) -> Result<Viewport, RenderError> {
    let bounds = surface.bounds();
    if bounds.is_empty() {
        return Err(RenderError::EmptySurface);
    }

    document.check_page(page)?;
    let page_size = document.page_size(page)?;
    if !page_size.is_drawable() {
        return Err(RenderError::InvalidGeometry {
            page: page.get(),
            width: page_size.width,
            height: page_size.height,
        });
    }

    let viewport = Viewport::unit(page_size).with_scale(fit_scale(bounds, page_size));
    let bitmap = document.render(page, viewport)?;
    surface.draw(viewport, bitmap);
    Ok(viewport)
}
