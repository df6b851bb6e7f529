use std::future::Future;

use datapad_archive::{ArchiveClient, ArchiveError};
use datapad_types::PersonRecord;

/// Source of personnel records, keyed by numeric id.
///
/// The display sequencer depends on this seam rather than on the HTTP client
/// directly so runs can be driven by scripted sources in tests.
pub trait RecordSource: Send + Sync {
    fn record(&self, id: u32) -> impl Future<Output = Result<PersonRecord, ArchiveError>> + Send;
}

impl RecordSource for ArchiveClient {
    fn record(&self, id: u32) -> impl Future<Output = Result<PersonRecord, ArchiveError>> + Send {
        self.fetch_person(id)
    }
}
