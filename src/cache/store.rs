//! Single-entry TTL cache over the instrument fetch
//!
//! Holds one `CacheEntry` (dataset + expiry) behind a `tokio::sync::Mutex`
//! that spans read-and-maybe-refresh as one critical section. That gives the
//! single-flight property directly: when the entry is stale or absent, the
//! first caller performs the refresh while every other concurrent caller
//! waits on the lock and then reads the freshly installed entry. A refresh
//! failure leaves the previous entry in place untouched and surfaces the
//! error to the caller; expired data is never served.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::data::csv::{decode, DecodeError};
use crate::data::{FetchError, FetchInstruments, SharedDataset};

/// Errors surfaced by a cache read that required a refresh
#[derive(Debug, Error)]
pub enum CacheError {
    /// The upstream fetch failed
    #[error("Failed to fetch instrument catalog: {0}")]
    Fetch(#[from] FetchError),

    /// The fetched payload could not be decoded
    #[error("Failed to decode instrument catalog: {0}")]
    Decode(#[from] DecodeError),
}

/// One cached dataset with its expiry instant
#[derive(Debug)]
struct CacheEntry {
    /// The decoded dataset installed by the last successful refresh
    dataset: SharedDataset,
    /// Absolute expiry; an entry is stale once `now >= expires_at`
    expires_at: Instant,
    /// Wall-clock stamp of the last successful refresh
    refreshed_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Single-entry TTL cache for the instrument catalog
///
/// Constructed once at startup with a fixed TTL and handed to the catalog
/// service; there is no global cache state. Generic over the fetcher so
/// tests can drive it with a scripted source.
#[derive(Debug)]
pub struct InstrumentCache<F> {
    /// Source of raw instrument payloads
    fetcher: F,
    /// How long a refreshed dataset stays fresh
    ttl: Duration,
    /// The entry, absent before the first successful refresh
    state: Mutex<Option<CacheEntry>>,
}

impl<F: FetchInstruments> InstrumentCache<F> {
    /// Creates a cache with the given fetcher and TTL
    pub fn new(fetcher: F, ttl: Duration) -> Self {
        Self {
            fetcher,
            ttl,
            state: Mutex::new(None),
        }
    }

    /// Returns the current dataset, refreshing it first if stale or absent
    ///
    /// Fresh reads clone the shared handle and return immediately. A stale or
    /// missing entry triggers exactly one upstream fetch; concurrent callers
    /// in that window share the refresh result or its error. On failure the
    /// previous entry (if any) is kept in place but not served, and the error
    /// propagates to every waiting caller of this critical section in turn.
    pub async fn get(&self) -> Result<SharedDataset, CacheError> {
        let mut state = self.state.lock().await;

        if let Some(entry) = state.as_ref() {
            if entry.is_fresh(Instant::now()) {
                return Ok(Arc::clone(&entry.dataset));
            }
        }

        let entry = self.refresh().await?;
        let dataset = Arc::clone(&entry.dataset);
        *state = Some(entry);
        Ok(dataset)
    }

    /// Returns the wall-clock time of the last successful refresh, if any
    pub async fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.state.lock().await.as_ref().map(|e| e.refreshed_at)
    }

    /// Fetches and decodes a new dataset, building a replacement entry
    ///
    /// Called with the state lock held; must not touch the stored entry so a
    /// failure leaves it exactly as it was.
    async fn refresh(&self) -> Result<CacheEntry, CacheError> {
        let payload = self.fetcher.fetch().await?;
        let decoded = decode(&payload)?;

        if decoded.mismatched_rows > 0 {
            log::warn!(
                "instrument catalog refresh: {} row(s) did not match the header column count",
                decoded.mismatched_rows
            );
        }
        log::debug!(
            "instrument catalog refreshed: {} records, next refresh in {:?}",
            decoded.dataset.len(),
            self.ttl
        );

        Ok(CacheEntry {
            dataset: Arc::new(decoded.dataset),
            expires_at: Instant::now() + self.ttl,
            refreshed_at: Utc::now(),
        })
    }
}
