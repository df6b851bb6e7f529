//! HTTP client for the remote personnel archive.
//!
//! The archive serves one record per numeric id at `GET {base}/people/{id}/`
//! as a JSON object with at least `name`, `height`, and `mass` string fields.
//! This crate treats it as an opaque async record source: every call is
//! independent, idempotent-safe to re-issue, and carries no retry, cache, or
//! deadline behavior. A display run that outlives its usefulness simply
//! discards whatever this client eventually returns.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;

use datapad_types::PersonRecord;

const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Failure of a single record fetch.
///
/// Every variant names the id it belongs to; the caller decides whether to
/// surface the failure or abandon the rest of its work.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to build archive HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not form a record URL for id {id}: {source}")]
    RecordUrl {
        id: u32,
        source: url::ParseError,
    },

    #[error("archive request for id {id} failed: {source}")]
    Request {
        id: u32,
        source: reqwest::Error,
    },

    #[error("archive returned {status} for id {id}")]
    Status {
        id: u32,
        status: reqwest::StatusCode,
    },

    #[error("archive record {id} could not be decoded: {source}")]
    Decode {
        id: u32,
        source: reqwest::Error,
    },
}

/// Client for one archive instance.
///
/// Wraps a connection-pooled [`reqwest::Client`]; cheap to clone and share
/// across concurrent display runs.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ArchiveClient {
    /// Build a client for the archive at `base_url`.
    pub fn new(mut base_url: Url) -> Result<Self, ArchiveError> {
        // Url::join treats a path without a trailing slash as a file and
        // would drop its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("datapad/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()
            .map_err(ArchiveError::Client)?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one record by id, suspending until the remote call completes.
    ///
    /// No retries and no deadline: a hung request stalls only the caller
    /// that awaits it.
    pub async fn fetch_person(&self, id: u32) -> Result<PersonRecord, ArchiveError> {
        let url = self.record_url(id)?;
        debug!(id, %url, "fetching archive record");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ArchiveError::Request { id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::Status { id, status });
        }

        response
            .json()
            .await
            .map_err(|source| ArchiveError::Decode { id, source })
    }

    fn record_url(&self, id: u32) -> Result<Url, ArchiveError> {
        self.base_url
            .join(&format!("people/{id}/"))
            .map_err(|source| ArchiveError::RecordUrl { id, source })
    }
}
