use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::DatapadConfig;
use crate::display::{Card, SharedRegion};
use crate::interaction::InteractionTracker;
use crate::sequencer::run_display;
use crate::source::RecordSource;

/// Top-level application state: the hover controller.
///
/// Owns the range entries, the current selection, the interaction tracker,
/// and the shared display region. The UI layer reads state each frame and
/// feeds decoded events back through [`App::hover`] and friends. Each hover
/// mints a fresh token and starts a new display run as a spawned task; the
/// token handoff is what lets a newer hover silently retire an older run.
pub struct App<S> {
    source: Arc<S>,
    region: SharedRegion,
    tracker: InteractionTracker,
    ranges: Vec<String>,
    selected: Option<usize>,
    muted: bool,
    chime_pending: bool,
}

impl<S> App<S> {
    /// Range labels shown in the sidebar, in display order.
    #[must_use]
    pub fn ranges(&self) -> &[String] {
        &self.ranges
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Cards currently visible, in render order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.region.cards()
    }

    /// Handle to the display region shared with running display tasks.
    #[must_use]
    pub fn region(&self) -> SharedRegion {
        self.region.clone()
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        debug!(muted = self.muted, "chime mute toggled");
    }

    /// True when a hover chime should sound this frame. Resets on read.
    pub fn take_chime(&mut self) -> bool {
        std::mem::take(&mut self.chime_pending)
    }
}

impl<S: RecordSource + 'static> App<S> {
    #[must_use]
    pub fn new(source: S, config: &DatapadConfig) -> Self {
        Self {
            source: Arc::new(source),
            region: SharedRegion::new(),
            tracker: InteractionTracker::new(),
            ranges: config.ranges(),
            selected: None,
            muted: config.start_muted(),
            chime_pending: false,
        }
    }

    /// Hover the entry at `index`: mint a token, supersede any in-flight run
    /// and start a new one. Re-hovering the same entry restarts its run.
    ///
    /// Must be called from within a tokio runtime; the run executes as a
    /// spawned task so rendering never waits on the network.
    pub fn hover(&mut self, index: usize) {
        let Some(label) = self.ranges.get(index).cloned() else {
            warn!(index, "hover on unknown range entry");
            return;
        };

        self.selected = Some(index);
        if !self.muted {
            self.chime_pending = true;
        }

        let token = self.tracker.begin();
        let source = Arc::clone(&self.source);
        let region = self.region.clone();
        let tracker = self.tracker.clone();
        tokio::spawn(async move {
            let outcome = run_display(source.as_ref(), &region, &tracker, &label, token).await;
            debug!(?outcome, %label, "display run finished");
        });
    }

    /// Move the hover selection down the sidebar.
    pub fn hover_next(&mut self) {
        if self.ranges.is_empty() {
            return;
        }
        let next = match self.selected {
            None => 0,
            Some(index) => (index + 1).min(self.ranges.len() - 1),
        };
        if self.selected != Some(next) {
            self.hover(next);
        }
    }

    /// Move the hover selection up the sidebar.
    pub fn hover_previous(&mut self) {
        let previous = match self.selected {
            None => 0,
            Some(index) => index.saturating_sub(1),
        };
        if self.selected != Some(previous) && !self.ranges.is_empty() {
            self.hover(previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use datapad_archive::ArchiveError;
    use datapad_types::PersonRecord;

    use super::App;
    use crate::config::DatapadConfig;
    use crate::source::RecordSource;

    struct InstantSource;

    impl RecordSource for InstantSource {
        fn record(
            &self,
            id: u32,
        ) -> impl Future<Output = Result<PersonRecord, ArchiveError>> + Send {
            std::future::ready(Ok(PersonRecord {
                name: format!("Person {id}"),
                height: "170".to_string(),
                mass: "70".to_string(),
            }))
        }
    }

    fn app() -> App<InstantSource> {
        App::new(InstantSource, &DatapadConfig::default())
    }

    #[tokio::test]
    async fn hover_selects_the_entry_and_requests_a_chime_when_unmuted() {
        let mut app = app();
        app.toggle_mute();
        assert!(!app.muted());

        app.hover(1);
        assert_eq!(app.selected(), Some(1));
        assert!(app.take_chime());
        assert!(!app.take_chime(), "the chime request resets on read");
    }

    #[tokio::test]
    async fn muted_hover_stays_silent() {
        let mut app = app();
        assert!(app.muted(), "the chime starts muted");

        app.hover(0);
        assert!(!app.take_chime());
    }

    #[tokio::test]
    async fn hover_on_an_unknown_entry_changes_nothing() {
        let mut app = app();
        app.hover(42);
        assert_eq!(app.selected(), None);
        assert!(!app.take_chime());
    }

    #[tokio::test]
    async fn selection_movement_clamps_at_the_edges() {
        let mut app = app();

        app.hover_previous();
        assert_eq!(app.selected(), Some(0));

        app.hover_next();
        app.hover_next();
        app.hover_next();
        assert_eq!(app.selected(), Some(2), "three default entries");

        app.hover_next();
        assert_eq!(app.selected(), Some(2));
    }

    #[tokio::test]
    async fn a_completed_run_fills_the_region() {
        let mut app = app();
        app.hover(0);

        // Default entry 0 is "1-5"; the instant source resolves as soon as
        // the spawned run is polled.
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
        let cards = app.cards();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].record.name, "Person 1");
    }
}
