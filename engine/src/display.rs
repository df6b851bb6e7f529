use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use datapad_types::{PersonRecord, Swatch};

/// One rendered result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub record: PersonRecord,
    pub swatch: Option<Swatch>,
}

#[derive(Debug, Default)]
struct DisplayRegion {
    cards: Vec<Card>,
}

/// Clonable handle to the display region.
///
/// Shared between display runs (writers) and the renderer (reader). Runs
/// clear it before streaming new cards in, so an empty region is observable
/// between runs.
#[derive(Debug, Clone, Default)]
pub struct SharedRegion {
    inner: Arc<Mutex<DisplayRegion>>,
}

impl SharedRegion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.lock().cards.clear();
    }

    pub fn push(&self, card: Card) {
        self.lock().cards.push(card);
    }

    /// Cards currently visible, in render order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.lock().cards.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().cards.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, DisplayRegion> {
        // A poisoned lock means a panicking holder; the card list itself is
        // never left mid-mutation.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
