// SPDX-License-Identifier: MPL-2.0
//! Page navigation module for stepping through a document.
//!
//! This module provides a `PageNavigator` that both comparison slots share,
//! so the original and processed panes always show the same page number.

use crate::domain::document::PageNumber;

/// Navigation state information for UI rendering.
///
/// A read-only snapshot of the navigator, used by the pane views to label the
/// page counter and enable or disable the previous/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Current 1-based page.
    pub current: PageNumber,
    /// Total number of pages (1 when no document is loaded).
    pub page_count: u16,
    /// Whether a document is loaded at all.
    pub has_document: bool,
}

impl NavigationInfo {
    /// Previous is disabled on the first page.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.current > PageNumber::FIRST
    }

    /// Next is disabled on the last page and when nothing is loaded.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.has_document && self.current.get() < self.page_count
    }
}

/// Tracks the current page of the loaded document.
///
/// The invariant `1 <= current <= page_count` holds at all times. Requests
/// that would break it are ignored rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigator {
    current: PageNumber,
    page_count: Option<u16>,
}

impl PageNavigator {
    /// Creates a navigator with no document loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: PageNumber::FIRST,
            page_count: None,
        }
    }

    /// Binds the navigator to a document with `page_count` pages and rewinds
    /// to the first page.
    pub fn load(&mut self, page_count: u16) {
        self.page_count = Some(page_count.max(1));
        self.current = PageNumber::FIRST;
    }

    /// Forgets the document and rewinds to the first page.
    pub fn reset(&mut self) {
        self.page_count = None;
        self.current = PageNumber::FIRST;
    }

    /// Returns the current page.
    #[must_use]
    pub fn current(&self) -> PageNumber {
        self.current
    }

    /// Returns the page count, defaulting to 1 when nothing is loaded.
    #[must_use]
    pub fn page_count(&self) -> u16 {
        self.page_count.unwrap_or(1)
    }

    /// Returns `true` when a document is bound.
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.page_count.is_some()
    }

    /// Moves by `delta` pages.
    ///
    /// The move is accepted only if the target stays within
    /// `1..=page_count`; otherwise the current page is left unchanged.
    /// Returns `true` if the page changed.
    pub fn advance(&mut self, delta: i32) -> bool {
        match self.current.offset(delta) {
            Some(target) if target != self.current => self.go_to(target),
            _ => false,
        }
    }

    /// Jumps to `page` if it is within range. Returns `true` if the page changed.
    pub fn go_to(&mut self, page: PageNumber) -> bool {
        if page.get() > self.page_count() || page == self.current {
            return false;
        }
        self.current = page;
        true
    }

    /// Jumps to the first page.
    pub fn first(&mut self) -> bool {
        self.go_to(PageNumber::FIRST)
    }

    /// Jumps to the last page.
    pub fn last(&mut self) -> bool {
        match PageNumber::new(self.page_count()) {
            Some(last) => self.go_to(last),
            None => false,
        }
    }

    /// Returns a snapshot for the view layer.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            current: self.current,
            page_count: self.page_count(),
            has_document: self.has_document(),
        }
    }
}

impl Default for PageNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u16) -> PageNumber {
        PageNumber::new(n).expect("non-zero page")
    }

    #[test]
    fn new_navigator_defaults_to_single_page() {
        let nav = PageNavigator::new();
        assert_eq!(nav.current(), PageNumber::FIRST);
        assert_eq!(nav.page_count(), 1);
        assert!(!nav.has_document());
    }

    #[test]
    fn advance_walks_through_five_pages_and_stops() {
        let mut nav = PageNavigator::new();
        nav.load(5);

        let mut seen = vec![nav.current().get()];
        for _ in 0..4 {
            assert!(nav.advance(1));
            seen.push(nav.current().get());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);

        assert!(!nav.advance(1));
        assert_eq!(nav.current(), page(5));
    }

    #[test]
    fn advance_backwards_on_first_page_is_noop() {
        let mut nav = PageNavigator::new();
        nav.load(3);
        assert!(!nav.advance(-1));
        assert_eq!(nav.current(), PageNumber::FIRST);
    }

    #[test]
    fn advance_rejects_large_jumps_out_of_range() {
        let mut nav = PageNavigator::new();
        nav.load(3);
        assert!(!nav.advance(5));
        assert!(!nav.advance(-5));
        assert_eq!(nav.current(), PageNumber::FIRST);
        assert!(nav.advance(2));
        assert_eq!(nav.current(), page(3));
    }

    #[test]
    fn advance_without_document_is_noop() {
        let mut nav = PageNavigator::new();
        assert!(!nav.advance(1));
        assert_eq!(nav.current(), PageNumber::FIRST);
    }

    #[test]
    fn go_to_accepts_only_valid_pages() {
        let mut nav = PageNavigator::new();
        nav.load(4);
        assert!(nav.go_to(page(4)));
        assert!(!nav.go_to(page(5)));
        assert_eq!(nav.current(), page(4));
    }

    #[test]
    fn first_and_last_jump_to_bounds() {
        let mut nav = PageNavigator::new();
        nav.load(7);
        assert!(nav.last());
        assert_eq!(nav.current(), page(7));
        assert!(!nav.last());
        assert!(nav.first());
        assert_eq!(nav.current(), PageNumber::FIRST);
    }

    #[test]
    fn load_rewinds_to_first_page() {
        let mut nav = PageNavigator::new();
        nav.load(9);
        nav.advance(3);
        nav.load(2);
        assert_eq!(nav.current(), PageNumber::FIRST);
        assert_eq!(nav.page_count(), 2);
    }

    #[test]
    fn reset_forgets_document() {
        let mut nav = PageNavigator::new();
        nav.load(9);
        nav.advance(3);
        nav.reset();
        assert_eq!(nav.current(), PageNumber::FIRST);
        assert!(!nav.has_document());
        assert_eq!(nav.page_count(), 1);
    }

    #[test]
    fn info_disables_buttons_at_bounds() {
        let mut nav = PageNavigator::new();
        let info = nav.info();
        assert!(!info.can_go_previous());
        assert!(!info.can_go_next());

        nav.load(2);
        let info = nav.info();
        assert!(!info.can_go_previous());
        assert!(info.can_go_next());

        nav.advance(1);
        let info = nav.info();
        assert!(info.can_go_previous());
        assert!(!info.can_go_next());
    }
}
