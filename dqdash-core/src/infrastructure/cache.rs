// dqdash-core/src/infrastructure/cache.rs

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::domain::check::Dataset;
use crate::error::DashboardError;
use crate::ports::source::{CacheKey, CheckSource};

struct CachedFetch {
    dataset: Dataset,
    fetched_at: Instant,
}

/// Session-scoped memo of full-table fetches.
///
/// Entries are keyed by `CacheKey` (connection fingerprint + table) and live
/// for `ttl`. A zero TTL never serves from cache. `invalidate` is the manual
/// refresh.
pub struct DatasetCache {
    ttl: Duration,
    entries: HashMap<CacheKey, CachedFetch>,
}

impl DatasetCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get_or_fetch(&mut self, source: &dyn CheckSource) -> Result<Dataset, DashboardError> {
        self.get_or_fetch_at(source, Instant::now()).await
    }

    async fn get_or_fetch_at(
        &mut self,
        source: &dyn CheckSource,
        now: Instant,
    ) -> Result<Dataset, DashboardError> {
        let key = source.cache_key();
        if let Some(dataset) = self.get_at(&key, now) {
            debug!(%key, "Serving check log from cache");
            return Ok(dataset);
        }

        info!(%key, engine = source.engine_name(), "Fetching check log");
        let dataset = source.fetch_all().await?;
        self.entries.insert(
            key,
            CachedFetch {
                dataset: dataset.clone(),
                fetched_at: now,
            },
        );
        Ok(dataset)
    }

    pub fn get(&self, key: &CacheKey) -> Option<Dataset> {
        self.get_at(key, Instant::now())
    }

    fn get_at(&self, key: &CacheKey, now: Instant) -> Option<Dataset> {
        let entry = self.entries.get(key)?;
        let age = now.saturating_duration_since(entry.fetched_at);
        (age < self.ttl).then(|| entry.dataset.clone())
    }

    pub fn invalidate(&mut self) {
        if !self.entries.is_empty() {
            info!(entries = self.entries.len(), "Fetch cache invalidated");
        }
        self.entries.clear();
    }

    pub fn invalidate_key(&mut self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
