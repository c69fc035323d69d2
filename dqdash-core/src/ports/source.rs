// dqdash-core/src/ports/source.rs

// What the dashboard needs from a database: the whole check log, once.
// Where it comes from (a DuckDB file, Postgres through DuckDB...) is the
// adapter's business.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::check::Dataset;
use crate::error::DashboardError;

/// Identity of a fetch: where we connect and which table we read.
/// The connection part is a fingerprint and must never carry a password.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub connection: String,
    pub table: String,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.connection, self.table)
    }
}

#[async_trait]
pub trait CheckSource: Send + Sync {
    /// Full-table fetch, `timestamp` already rendered as text.
    async fn fetch_all(&self) -> Result<Dataset, DashboardError>;

    fn cache_key(&self) -> CacheKey;

    fn engine_name(&self) -> &str;
}
