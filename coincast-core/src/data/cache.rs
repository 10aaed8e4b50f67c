//! Bounded in-memory history cache.
//!
//! Memoizes load results per exact `(symbol, start date)` pair with
//! least-recently-used eviction. Entries are immutable once written —
//! historical closes don't change retroactively, so there is no
//! invalidation path. Nothing is persisted across sessions.

use crate::domain::PriceSeries;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache key: the exact load request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryKey {
    pub symbol: String,
    pub start: NaiveDate,
}

/// LRU cache over immutable price series.
///
/// Recency is tracked with a monotonic tick; eviction scans for the
/// smallest tick. Capacities are small (tens of entries), so the linear
/// scan stays cheap.
pub struct HistoryCache {
    capacity: usize,
    tick: u64,
    entries: HashMap<HistoryKey, CacheEntry>,
}

struct CacheEntry {
    series: Arc<PriceSeries>,
    last_used: u64,
}

impl HistoryCache {
    /// Create a cache holding at most `capacity` entries. A capacity of
    /// zero disables caching entirely.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tick: 0,
            entries: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a series, refreshing its recency on hit.
    pub fn get(&mut self, key: &HistoryKey) -> Option<Arc<PriceSeries>> {
        self.tick += 1;
        let tick = self.tick;
        self.entries.get_mut(key).map(|entry| {
            entry.last_used = tick;
            Arc::clone(&entry.series)
        })
    }

    /// Insert a series, evicting the least-recently-used entry when full.
    pub fn insert(&mut self, key: HistoryKey, series: Arc<PriceSeries>) {
        if self.capacity == 0 {
            return;
        }

        self.tick += 1;

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone())
            {
                self.entries.remove(&oldest);
            }
        }

        self.entries.insert(
            key,
            CacheEntry {
                series,
                last_used: self.tick,
            },
        );
    }
}
