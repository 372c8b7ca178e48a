//! In-memory cache for the instrument catalog
//!
//! This module provides a single-entry cache that holds the latest decoded
//! instrument dataset together with its expiry instant. Reads within the TTL
//! are served from memory; a stale or missing entry triggers one upstream
//! refresh shared by every concurrent caller.

mod store;

pub use store::{CacheError, InstrumentCache};
