use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use datapad_types::InteractionId;

/// Mints interaction tokens and remembers the most recent one.
///
/// One token is minted per hover. A display run captures its token by value
/// and compares it against the current token at each cooperative checkpoint;
/// inequality means a newer hover began and the run must stop rendering.
/// The counter is atomic so checkpoints on worker tasks observe the latest
/// mint without locking.
#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    current: Arc<AtomicU64>,
}

impl InteractionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token and make it current, superseding every token
    /// minted before it.
    pub fn begin(&self) -> InteractionId {
        InteractionId::new(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `token` is still the most recently minted token.
    #[must_use]
    pub fn is_current(&self, token: InteractionId) -> bool {
        self.current.load(Ordering::Acquire) == token.value()
    }
}

#[cfg(test)]
mod tests {
    use super::InteractionTracker;

    #[test]
    fn minted_tokens_are_unique() {
        let tracker = InteractionTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_ne!(first, second);
    }

    #[test]
    fn a_new_mint_supersedes_the_previous_token() {
        let tracker = InteractionTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn clones_share_the_same_current_token() {
        let tracker = InteractionTracker::new();
        let observer = tracker.clone();
        let token = tracker.begin();
        assert!(observer.is_current(token));
    }
}
