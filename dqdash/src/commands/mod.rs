// dqdash/src/commands/mod.rs

pub mod display;
pub mod explore;
pub mod options;
pub mod render;
pub mod summary;

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

use dqdash_core::application::{DashboardSession, load_dataset};
use dqdash_core::domain::check::FilterSelection;
use dqdash_core::infrastructure::adapters::DuckDBSource;
use dqdash_core::infrastructure::cache::DatasetCache;
use dqdash_core::infrastructure::config::{DashboardConfig, load_dashboard_config};
use dqdash_core::ports::CheckSource;

/// Config + source + fetch cache, shared by every command.
pub struct Workspace {
    pub project_dir: PathBuf,
    pub config: DashboardConfig,
    pub source: DuckDBSource,
    pub cache: DatasetCache,
}

impl Workspace {
    pub fn open(project_dir: &Path) -> anyhow::Result<Self> {
        let config = load_dashboard_config(project_dir).with_context(|| {
            format!("Failed to load dashboard configuration from {:?}", project_dir)
        })?;
        let source = DuckDBSource::from_config(&config.source)
            .with_context(|| format!("Failed to open source {}", config.source.fingerprint()))?;
        let cache = DatasetCache::new(config.cache.ttl());
        info!(source = %source.cache_key(), ttl = ?cache.ttl(), "Workspace ready");

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            config,
            source,
            cache,
        })
    }

    pub async fn session(&mut self, selection: FilterSelection) -> anyhow::Result<DashboardSession> {
        let dataset = load_dataset(&self.source, &mut self.cache)
            .await
            .with_context(|| format!("Failed to fetch check log {}", self.source.cache_key()))?;
        Ok(DashboardSession::with_selection(dataset, selection))
    }

    pub fn source_label(&self) -> String {
        self.source.cache_key().to_string()
    }

    pub fn target_dir(&self) -> PathBuf {
        self.project_dir.join(&self.config.target_path)
    }
}
