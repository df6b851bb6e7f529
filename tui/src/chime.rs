//! The hover chime.
//!
//! Terminal rendition of the original effect audio: a BEL on hover when the
//! chime is unmuted. A failed write is logged and never surfaced; losing a
//! chime must not disturb the session.

use std::io::{self, Write};

use tracing::warn;

/// Sound the hover chime. Infallible from the caller's point of view.
pub fn hover_chime() {
    if let Err(err) = emit_bell() {
        warn!(%err, "hover chime failed");
    }
}

fn emit_bell() -> io::Result<()> {
    let mut out = io::stdout();
    out.write_all(b"\x07")?;
    out.flush()
}
