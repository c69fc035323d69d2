// dqdash-core/src/application/loader.rs

use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::domain::check::Dataset;
use crate::error::DashboardError;
use crate::infrastructure::cache::DatasetCache;
use crate::ports::source::CheckSource;

/// Loads the check log for a session, going through the fetch cache.
/// A failed fetch is fatal for the session: it is logged and returned as is.
#[instrument(skip(source, cache), fields(key = %source.cache_key()))]
pub async fn load_dataset(
    source: &dyn CheckSource,
    cache: &mut DatasetCache,
) -> Result<Dataset, DashboardError> {
    let start = Instant::now();

    match cache.get_or_fetch(source).await {
        Ok(dataset) => {
            debug!(rows = dataset.len(), "✅ Dataset ready in {:.2?}", start.elapsed());
            Ok(dataset)
        }
        Err(e) => {
            error!("❌ Fetch failed after {:.2?}: {}", start.elapsed(), e);
            Err(e)
        }
    }
}

/// Manual refresh: drops the cached snapshot and fetches again.
pub async fn reload_dataset(
    source: &dyn CheckSource,
    cache: &mut DatasetCache,
) -> Result<Dataset, DashboardError> {
    cache.invalidate_key(&source.cache_key());
    load_dataset(source, cache).await
}
