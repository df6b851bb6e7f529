//! The display run: parse a range label, derive its swatch, then stream
//! fetched cards into the display region one at a time.
//!
//! A run terminates at the first of: the five-card cap, the end of the range,
//! a fetch failure, or supersession by a newer interaction. Supersession is
//! cooperative: nothing aborts a stale run's in-flight fetch, the run simply
//! stops consuming at its next checkpoint and the fetched record is dropped.

use tracing::{debug, warn};

use datapad_types::{IdRange, InteractionId, Swatch};

use crate::display::{Card, SharedRegion};
use crate::interaction::InteractionTracker;
use crate::source::RecordSource;

/// Hard cap on cards rendered per run, regardless of range width.
pub const MAX_CARDS: usize = 5;

/// Terminal state of a display run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The range label did not parse. Nothing was cleared or rendered.
    InvalidRange,
    /// A newer interaction superseded this run mid-stream.
    Superseded { rendered: usize },
    /// A fetch failed. Cards already rendered stay; the rest of the range
    /// is abandoned.
    Failed { rendered: usize },
    /// The card cap or the end of the range was reached.
    Completed { rendered: usize },
}

/// Execute one display run for `label` under `token`.
///
/// The region is cleared before the first fetch resolves, then cards append
/// in ascending id order. Staleness is checked exactly once per iteration,
/// before the fetch is awaited: a card whose checkpoint passed still renders
/// if supersession happens during its fetch, and the run stops at the next
/// checkpoint instead.
pub async fn run_display<S: RecordSource>(
    source: &S,
    region: &SharedRegion,
    tracker: &InteractionTracker,
    label: &str,
    token: InteractionId,
) -> RunOutcome {
    let range = match IdRange::parse(label) {
        Ok(range) => range,
        Err(err) => {
            warn!(%err, label, "display run rejected its range label");
            return RunOutcome::InvalidRange;
        }
    };

    // Resolved once per run; every card in the run shares it.
    let swatch = Swatch::for_range(range.start(), range.end());

    region.clear();

    // Descriptors only. A fetch is issued when its element is consumed, so
    // the sequence is safe to build for arbitrarily wide ranges.
    let descriptors = range.ids().map(|id| (id, swatch));

    let mut rendered = 0;
    for (id, swatch) in descriptors.take(MAX_CARDS) {
        if !tracker.is_current(token) {
            debug!(%token, id, rendered, "display run superseded");
            return RunOutcome::Superseded { rendered };
        }

        let record = match source.record(id).await {
            Ok(record) => record,
            Err(err) => {
                warn!(%err, id, rendered, "abandoning display run after fetch failure");
                return RunOutcome::Failed { rendered };
            }
        };

        region.push(Card { record, swatch });
        rendered += 1;
    }

    debug!(%token, rendered, "display run completed");
    RunOutcome::Completed { rendered }
}
