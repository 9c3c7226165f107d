//! TTL cache for enriched query results.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use cryptov7_core::QueryKey;

use crate::enrich::Enrichment;

struct CacheEntry {
    enrichment: Enrichment,
    created_at: Instant,
}

/// In-memory memoization of enriched results, one entry per normalized key.
///
/// The whole enrichment pass is cached — articles plus the degraded count —
/// so a hit reproduces exactly what the miss returned. Entries expire a
/// fixed TTL after `put` and are evicted lazily on the next `get`, or
/// overwritten outright by a later `put` for the same key. The mutex
/// serializes `put`s; concurrent identical misses may still fetch
/// redundantly (no single-flight). No capacity bound.
pub struct TtlCache {
    ttl: Duration,
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
}

impl TtlCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a live entry, removing it if expired.
    pub async fn get(&self, key: &QueryKey) -> Option<Enrichment> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.created_at.elapsed() < self.ttl => {
                Some(entry.enrichment.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a value, replacing any existing entry and resetting its age.
    pub async fn put(&self, key: QueryKey, enrichment: Enrichment) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key,
            CacheEntry {
                enrichment,
                created_at: Instant::now(),
            },
        );
    }

    /// Number of entries currently stored, live or expired.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
