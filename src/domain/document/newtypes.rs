// SPDX-License-Identifier: MPL-2.0
//! Document newtypes.
//!
//! Type-safe wrappers for page numbers, page geometry and document identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// DocumentId
// =============================================================================

/// Process-unique identity of a parsed document.
///
/// Every parse produces a new id, so uploading the same file twice still
/// counts as a document replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Allocates a new unique document id.
    #[must_use]
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

// =============================================================================
// PageNumber
// =============================================================================

/// 1-based page number.
///
/// A `PageNumber` is never zero. Whether it is within a document's page count
/// is checked by the navigator, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u16);

impl PageNumber {
    /// The first page of every document.
    pub const FIRST: Self = Self(1);

    /// Creates a page number, returning `None` for zero.
    #[must_use]
    pub fn new(value: u16) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    /// Returns the 1-based value.
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index used by PDF engines.
    #[must_use]
    pub fn index(self) -> u16 {
        self.0 - 1
    }

    /// Offsets the page number by `delta`, returning `None` when the result
    /// would fall below 1 or overflow.
    #[must_use]
    pub fn offset(self, delta: i32) -> Option<Self> {
        let target = i32::from(self.0).checked_add(delta)?;
        u16::try_from(target).ok().and_then(Self::new)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Page geometry in PDF points at unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both sides are finite and strictly positive.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// Page geometry at a given uniform scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    page: PageSize,
    scale: f32,
}

impl Viewport {
    /// Viewport of a page at scale 1.
    #[must_use]
    pub fn unit(page: PageSize) -> Self {
        Self { page, scale: 1.0 }
    }

    /// Returns the same page at a new scale.
    #[must_use]
    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    #[must_use]
    pub fn scale(self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn page(self) -> PageSize {
        self.page
    }

    /// Scaled width in points.
    #[must_use]
    pub fn width(self) -> f32 {
        self.page.width * self.scale
    }

    /// Scaled height in points.
    #[must_use]
    pub fn height(self) -> f32 {
        self.page.height * self.scale
    }

    /// Scaled size in whole pixels, floored and never below 1×1.
    ///
    /// Values within float rounding of the next integer snap up to it, so a
    /// page fitted to a bound fills that bound exactly.
    #[must_use]
    pub fn pixel_size(self) -> PixelSize {
        PixelSize::new(floor_px(self.width()), floor_px(self.height()))
    }
}

/// Relative tolerance absorbing `f32` error in `scale * length`.
const PIXEL_SNAP: f32 = 1e-5;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_px(value: f32) -> u32 {
    let snapped = value + value.abs() * PIXEL_SNAP;
    (snapped.floor() as u32).max(1)
}

// =============================================================================
// PixelSize
// =============================================================================

/// Integer pixel dimensions of a drawing surface or bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
