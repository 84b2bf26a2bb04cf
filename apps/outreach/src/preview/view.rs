use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::models::handoff::ChatHandoff;
use crate::preview::carousel::CandidateCarousel;
use crate::preview::handoff::handoff_from_store;
use crate::preview::normaliser::{load_blob, normalise};
use crate::preview::render::render_preview;
use crate::scroll::{ScrollContainer, ScrollSubscription};
use crate::store::{write_json, ClientStore, CANDIDATE_DATA_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPhase {
    Loading,
    Ready,
}

/// The mounted outreach preview: carousel state plus the sticky-header scroll flag.
///
/// The scroll subscription lives exactly as long as the view; dropping the view
/// unmounts it.
pub struct OutreachPreview {
    phase: PreviewPhase,
    carousel: CandidateCarousel,
    scrolled: Arc<AtomicBool>,
    scroll_subscription: Option<ScrollSubscription>,
}

impl OutreachPreview {
    pub fn new() -> Self {
        OutreachPreview {
            phase: PreviewPhase::Loading,
            carousel: CandidateCarousel::default(),
            scrolled: Arc::new(AtomicBool::new(false)),
            scroll_subscription: None,
        }
    }

    /// Loads the blob, publishes the normalised candidates and starts
    /// following the scroll container.
    pub fn mount(&mut self, store: &dyn ClientStore, container: &ScrollContainer) {
        let blob = load_blob(store);
        self.carousel = CandidateCarousel::new(normalise(blob.as_ref()));

        self.scrolled
            .store(container.scroll_top() > 0.0, Ordering::Relaxed);
        let scrolled = Arc::clone(&self.scrolled);
        self.scroll_subscription =
            Some(container.subscribe(move |offset| scrolled.store(offset > 0.0, Ordering::Relaxed)));

        self.phase = PreviewPhase::Ready;
        if self.carousel.is_empty() {
            warn!("Outreach preview mounted without any candidate email");
            return;
        }
        info!(
            "Outreach preview mounted with {} candidate(s)",
            self.carousel.len()
        );
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PreviewPhase::Loading
    }

    /// Whether the sticky header carries the `scrolled` modifier.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled.load(Ordering::Relaxed)
    }

    pub fn carousel(&self) -> &CandidateCarousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CandidateCarousel {
        &mut self.carousel
    }

    /// "Speak to Cleo": builds the handoff for the current candidate and
    /// persists it. `None` when there is no candidate to talk about.
    ///
    /// A failed write is logged inside `write_json`; the handoff is still returned
    /// so navigation proceeds.
    pub fn speak_to_cleo(&self, store: &dyn ClientStore, timestamp: i64) -> Option<ChatHandoff> {
        let Some(candidate) = self.carousel.current() else {
            warn!("Speak to Cleo requested with no candidate email loaded");
            return None;
        };

        let handoff = handoff_from_store(store, candidate, timestamp);
        write_json(store, CANDIDATE_DATA_KEY, &handoff);
        Some(handoff)
    }

    pub fn render(&self) -> String {
        render_preview(self)
    }
}

impl Default for OutreachPreview {
    fn default() -> Self {
        Self::new()
    }
}
