// SPDX-License-Identifier: MPL-2.0
//! Side-by-side comparison state.
//!
//! Two slots ("original" and "processed") each bind an optional document to
//! their own drawing surface. The page index lives in a single
//! [`PageNavigator`] injected into both, so the panes can never disagree on
//! the current page.
//!
//! Rendering is driven by [`ComparisonState::refresh`]: after any mutation,
//! every slot whose [`RenderKey`] changed since its last render is drawn
//! again. Unchanged slots are left alone.

use super::port::{DocumentSink, SharedDocument, SinkError};
use super::query::{NavigationInfo, PageNavigator};
use super::render::{render_page, RenderError, RenderKey, Surface};
use crate::domain::document::{PageNumber, PixelSize, Viewport};
use std::fmt;

/// Identity of a display pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Original,
    Processed,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Original, Slot::Processed];

    /// i18n key of the pane heading.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Slot::Original => "pane-original-title",
            Slot::Processed => "pane-processed-title",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Original => write!(f, "original"),
            Slot::Processed => write!(f, "processed"),
        }
    }
}

/// A document bound to the surface it is drawn on.
pub struct SlotBinding {
    document: Option<SharedDocument>,
    surface: Surface,
    rendered: Option<RenderKey>,
}

impl fmt::Debug for SlotBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotBinding")
            .field("document", &self.document.as_ref().map(|doc| doc.id()))
            .field("surface", &self.surface.pixel_size())
            .field("rendered", &self.rendered)
            .finish()
    }
}

impl SlotBinding {
    fn new(bounds: PixelSize) -> Self {
        Self {
            document: None,
            surface: Surface::new(bounds),
            rendered: None,
        }
    }

    #[must_use]
    pub fn document(&self) -> Option<&SharedDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    fn key(&self, page: PageNumber) -> Option<RenderKey> {
        self.document.as_ref().map(|doc| RenderKey {
            document: doc.id(),
            bounds: self.surface.bounds(),
            page,
        })
    }

    fn clear(&mut self) {
        self.document = None;
        self.surface.clear();
        self.rendered = None;
    }
}

/// Result of re-rendering one slot during [`ComparisonState::refresh`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub slot: Slot,
    pub page: PageNumber,
    pub result: Result<Viewport, RenderError>,
}

/// Both panes plus the shared page index.
#[derive(Debug)]
pub struct ComparisonState {
    original: SlotBinding,
    processed: SlotBinding,
    navigator: PageNavigator,
}

impl ComparisonState {
    /// Creates an empty comparison whose surfaces fit pages into `bounds`.
    #[must_use]
    pub fn new(bounds: PixelSize) -> Self {
        Self {
            original: SlotBinding::new(bounds),
            processed: SlotBinding::new(bounds),
            navigator: PageNavigator::new(),
        }
    }

    #[must_use]
    pub fn slot(&self, slot: Slot) -> &SlotBinding {
        match slot {
            Slot::Original => &self.original,
            Slot::Processed => &self.processed,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotBinding {
        match slot {
            Slot::Original => &mut self.original,
            Slot::Processed => &mut self.processed,
        }
    }

    /// Document shown in `slot`, if any.
    #[must_use]
    pub fn document(&self, slot: Slot) -> Option<&SharedDocument> {
        self.slot(slot).document()
    }

    /// Returns `true` when the original pane holds a document.
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.original.document.is_some()
    }

    /// Page shown by `slot`. Both slots share one index.
    #[must_use]
    pub fn current_page(&self, _slot: Slot) -> PageNumber {
        self.navigator.current()
    }

    /// Navigation snapshot for the pane headers.
    #[must_use]
    pub fn navigation(&self) -> NavigationInfo {
        self.navigator.info()
    }

    /// Installs a freshly parsed document into both slots and rewinds to
    /// page 1.
    ///
    /// No separate processed document exists yet, so both panes show the
    /// same handle.
    pub fn install(&mut self, document: SharedDocument) {
        tracing::debug!(
            document = %document.id(),
            pages = document.page_count(),
            "installing document in both slots"
        );
        self.navigator.load(document.page_count());
        self.processed.document = Some(SharedDocument::clone(&document));
        self.original.document = Some(document);
    }

    /// Clears both slots and rewinds to page 1.
    pub fn reset(&mut self) {
        self.original.clear();
        self.processed.clear();
        self.navigator.reset();
    }

    /// Moves the shared page index by `delta`. See [`PageNavigator::advance`].
    pub fn advance(&mut self, delta: i32) -> bool {
        self.navigator.advance(delta)
    }

    /// Jumps both panes to `page` when it is in range.
    pub fn go_to(&mut self, page: PageNumber) -> bool {
        self.navigator.go_to(page)
    }

    pub fn first_page(&mut self) -> bool {
        self.navigator.first()
    }

    pub fn last_page(&mut self) -> bool {
        self.navigator.last()
    }

    /// Changes the fit box of both surfaces.
    pub fn set_surface_bounds(&mut self, bounds: PixelSize) {
        for slot in Slot::ALL {
            self.slot_mut(slot).surface.set_bounds(bounds);
        }
    }

    /// Current fit box shared by both surfaces.
    #[must_use]
    pub fn surface_bounds(&self) -> PixelSize {
        self.original.surface.bounds()
    }

    /// Re-renders every slot whose inputs changed since its last render.
    ///
    /// The key is recorded even when rendering fails, so a broken page is
    /// not retried until the document, bounds or page change.
    pub fn refresh(&mut self) -> Vec<RenderOutcome> {
        let page = self.navigator.current();
        let mut outcomes = Vec::new();

        for slot in Slot::ALL {
            let binding = self.slot_mut(slot);
            let Some(key) = binding.key(page) else {
                continue;
            };
            if binding.rendered == Some(key) {
                continue;
            }
            let Some(document) = binding.document.clone() else {
                continue;
            };

            let result = render_page(document.as_ref(), &mut binding.surface, page);
            binding.rendered = Some(key);

            match &result {
                Ok(viewport) => tracing::debug!(
                    %slot,
                    page = page.get(),
                    scale = viewport.scale(),
                    size = %binding.surface.pixel_size(),
                    "rendered page"
                ),
                Err(err) => tracing::warn!(%slot, page = page.get(), error = %err, "render failed"),
            }

            outcomes.push(RenderOutcome { slot, page, result });
        }

        outcomes
    }

    /// Hands the original document to `sink`. Does nothing when empty.
    pub fn submit(&self, sink: &dyn DocumentSink) -> Option<Result<(), SinkError>> {
        self.original.document().map(|doc| sink.submit(doc.as_ref()))
    }

    /// Hands the processed document to `sink`. Does nothing when empty.
    pub fn approve(&self, sink: &dyn DocumentSink) -> Option<Result<(), SinkError>> {
        self.processed.document().map(|doc| sink.approve(doc.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::DocumentHandle;
    use crate::test_utils::{FakeDocument, RecordingSink};
    use std::rc::Rc;

    const BOUNDS: PixelSize = PixelSize::new(400, 500);

    fn page(n: u16) -> PageNumber {
        PageNumber::new(n).expect("non-zero page")
    }

    fn loaded(pages: u16) -> (ComparisonState, Rc<FakeDocument>) {
        let mut state = ComparisonState::new(BOUNDS);
        let doc = FakeDocument::shared(pages);
        state.install(doc.clone());
        (state, doc)
    }

    #[test]
    fn install_fills_both_slots_with_same_document() {
        let (state, doc) = loaded(3);
        for slot in Slot::ALL {
            let bound = state.document(slot).expect("slot filled");
            assert_eq!(bound.id(), doc.id());
        }
        assert_eq!(state.navigation().page_count, 3);
        assert_eq!(state.current_page(Slot::Original), PageNumber::FIRST);
    }

    #[test]
    fn install_rewinds_page_index() {
        let (mut state, _) = loaded(4);
        state.advance(2);
        state.install(FakeDocument::shared(6));
        assert_eq!(state.current_page(Slot::Original), PageNumber::FIRST);
        assert_eq!(state.navigation().page_count, 6);
    }

    #[test]
    fn reset_empties_slots_and_rewinds() {
        let (mut state, _) = loaded(4);
        state.advance(3);
        state.refresh();
        state.reset();

        assert!(state.document(Slot::Original).is_none());
        assert!(state.document(Slot::Processed).is_none());
        assert_eq!(state.current_page(Slot::Original), PageNumber::FIRST);
        assert!(state.slot(Slot::Original).surface().bitmap().is_none());
        assert!(!state.navigation().has_document);
    }

    #[test]
    fn slots_always_share_the_page_number() {
        let (mut state, _) = loaded(5);
        for delta in [1, 1, -1, 3, 5, -10, 2] {
            state.advance(delta);
            assert_eq!(
                state.current_page(Slot::Original),
                state.current_page(Slot::Processed)
            );
        }
        state.last_page();
        assert_eq!(state.current_page(Slot::Processed), page(5));
    }

    #[test]
    fn refresh_renders_each_slot_once_per_key() {
        let (mut state, doc) = loaded(3);

        let outcomes = state.refresh();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert_eq!(doc.render_count(), 2);

        // Nothing changed: no render.
        assert!(state.refresh().is_empty());
        assert_eq!(doc.render_count(), 2);

        // A rejected move changes nothing either.
        state.advance(-1);
        assert!(state.refresh().is_empty());

        state.advance(1);
        let outcomes = state.refresh();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.page == page(2)));
        assert_eq!(doc.render_count(), 4);
    }

    #[test]
    fn refresh_reacts_to_bounds_change() {
        let (mut state, doc) = loaded(1);
        state.refresh();

        state.set_surface_bounds(PixelSize::new(200, 200));
        state.refresh();
        assert_eq!(doc.render_count(), 4);
        assert!(state.slot(Slot::Original).surface().pixel_size().width <= 200);

        state.set_surface_bounds(PixelSize::new(200, 200));
        assert!(state.refresh().is_empty());
    }

    #[test]
    fn refresh_reacts_to_document_replacement() {
        let (mut state, first) = loaded(2);
        state.refresh();

        let second = FakeDocument::shared(2);
        state.install(second.clone());
        state.refresh();
        assert_eq!(first.render_count(), 2);
        assert_eq!(second.render_count(), 2);
    }

    #[test]
    fn refresh_with_nothing_loaded_is_empty() {
        let mut state = ComparisonState::new(BOUNDS);
        assert!(state.refresh().is_empty());
    }

    #[test]
    fn failed_render_is_not_retried_until_inputs_change() {
        let mut state = ComparisonState::new(PixelSize::new(0, 0));
        let doc = FakeDocument::shared(2);
        state.install(doc.clone());

        let outcomes = state.refresh();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|o| o.result == Err(RenderError::EmptySurface)));
        assert!(state.refresh().is_empty());

        state.set_surface_bounds(BOUNDS);
        let outcomes = state.refresh();
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
    }

    #[test]
    fn sink_receives_slot_documents() {
        let sink = RecordingSink::default();
        let empty = ComparisonState::new(BOUNDS);
        assert!(empty.submit(&sink).is_none());
        assert!(empty.approve(&sink).is_none());

        let (state, doc) = loaded(1);
        assert_eq!(state.submit(&sink), Some(Ok(())));
        assert_eq!(state.approve(&sink), Some(Ok(())));
        assert_eq!(*sink.submitted.borrow(), vec![doc.id()]);
        assert_eq!(*sink.approved.borrow(), vec![doc.id()]);
    }
}
