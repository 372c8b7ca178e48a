//! Catalog service: the consumer entry point over the cached instrument data
//!
//! Owns the TTL cache (constructed once at startup, dependency-injected) and
//! composes it with the paginator and the symbol lookup. Every read goes
//! through [`InstrumentCache::get`], so callers transparently trigger a
//! refresh when the entry is stale and otherwise share the installed dataset.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::cache::{CacheError, InstrumentCache};
use crate::data::{FetchInstruments, Record};
use crate::pagination::{paginate, Page};

/// Field that uniquely identifies an instrument in the upstream dump
const SYMBOL_FIELD: &str = "tradingsymbol";

/// Errors surfaced by catalog reads
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be fetched or decoded
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// No instrument carries the requested trading symbol
    #[error("Fund not found: {0}")]
    FundNotFound(String),
}

/// Paginated, cached view over the mutual fund instrument catalog
#[derive(Debug)]
pub struct Catalog<F> {
    cache: InstrumentCache<F>,
}

impl<F: FetchInstruments> Catalog<F> {
    /// Creates a catalog over the given cache
    pub fn new(cache: InstrumentCache<F>) -> Self {
        Self { cache }
    }

    /// Returns one page of the catalog
    ///
    /// `page` and `size` are caller-supplied and clamped by the paginator;
    /// see [`paginate`] for the normalization rules.
    pub async fn page(&self, page: i64, size: i64) -> Result<Page, CatalogError> {
        let dataset = self.cache.get().await?;
        Ok(paginate(&dataset, page, size))
    }

    /// Returns the instrument with the given trading symbol
    ///
    /// A missing symbol is a [`CatalogError::FundNotFound`], distinct from an
    /// upstream failure.
    pub async fn fund(&self, tradingsymbol: &str) -> Result<Record, CatalogError> {
        let dataset = self.cache.get().await?;
        let found = dataset
            .iter()
            .find(|record| record.get(SYMBOL_FIELD) == Some(tradingsymbol))
            .cloned()
            .ok_or_else(|| CatalogError::FundNotFound(tradingsymbol.to_string()));
        found
    }

    /// Returns the wall-clock time of the last successful catalog refresh
    pub async fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.cache.last_refreshed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FetchError;
    use std::future::Future;
    use std::time::Duration;

    const PAYLOAD: &str = "\
tradingsymbol,name,scheme_type
INF001,Alpha Fund,equity
INF002,Beta Fund,debt
INF003,Gamma Fund,hybrid
";

    struct StaticFetcher;

    impl FetchInstruments for StaticFetcher {
        fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
            async { Ok(PAYLOAD.as_bytes().to_vec()) }
        }
    }

    fn catalog() -> Catalog<StaticFetcher> {
        Catalog::new(InstrumentCache::new(StaticFetcher, Duration::from_secs(3600)))
    }

    #[tokio::test]
    async fn test_page_composes_cache_and_paginator() {
        let catalog = catalog();

        let page = catalog.page(0, 2).await.expect("Page should succeed");
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.number_of_elements, 2);
        assert_eq!(page.content[0].get("tradingsymbol"), Some("INF001"));

        let last = catalog.page(1, 2).await.expect("Page should succeed");
        assert_eq!(last.number_of_elements, 1);
        assert!(last.last);
    }

    #[tokio::test]
    async fn test_fund_lookup_by_symbol() {
        let catalog = catalog();

        let fund = catalog.fund("INF002").await.expect("Fund should exist");
        assert_eq!(fund.get("name"), Some("Beta Fund"));
        assert_eq!(fund.get("scheme_type"), Some("debt"));
    }

    #[tokio::test]
    async fn test_missing_fund_is_not_found_error() {
        let catalog = catalog();

        let result = catalog.fund("INF999").await;
        match result {
            Err(CatalogError::FundNotFound(symbol)) => assert_eq!(symbol, "INF999"),
            other => panic!("Expected FundNotFound, got {:?}", other),
        }
    }
}
