use serde::{Deserialize, Serialize};

/// One personnel record as served by the archive.
///
/// Fields pass through exactly as the archive sent them, including values
/// like `"unknown"`. Unit suffixes are applied at render time, never parsed
/// out of the data. Fields the archive sends beyond these three are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub height: String,
    pub mass: String,
}
