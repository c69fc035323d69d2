// dqdash-core/src/infrastructure/config/project.rs

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};
use validator::Validate;

use crate::infrastructure::config::source::{SourceConfig, SourceType};
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[validate(nested)]
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            source: SourceConfig::default(),
            cache: CacheConfig::default(),
            target_path: default_target_path(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CacheConfig {
    /// 0 disables reuse of a previous fetch.
    #[serde(rename = "ttl-seconds", default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

fn default_title() -> String {
    "Data Quality Dashboard".to_string()
}
fn default_target_path() -> String {
    "target".to_string()
}
fn default_ttl_seconds() -> u64 {
    300
}

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_dashboard_config(project_dir: &Path) -> Result<DashboardConfig, InfrastructureError> {
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading dashboard config");

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read dashboard config at {:?}", config_path))?;
    let mut config = parse_config(&content)
        .with_context(|| format!("Failed to parse dashboard config at {:?}", config_path))?;

    // DQDASH_TABLE=other.table dqdash summary
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    resolve_paths(&mut config, project_dir);

    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

pub fn parse_config(content: &str) -> Result<DashboardConfig, InfrastructureError> {
    Ok(serde_yaml::from_str(content)?)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["dqdash.yaml", "dqdash.yml"];
    candidates
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "No configuration file found in {:?}. Checked: {:?}",
                root, candidates
            ))
        })
}

pub fn apply_env_overrides<F>(config: &mut DashboardConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("DQDASH_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Some(val) = lookup("DQDASH_TABLE") {
        info!(old = ?config.source.table, new = ?val, "Overriding table via ENV");
        config.source.table = val;
    }
    if let Some(val) = lookup("DQDASH_PG_PASSWORD") {
        info!("Postgres password provided via ENV");
        config.source.password = Some(val);
    }
}

/// Relative DuckDB files are relative to the project, not the cwd.
fn resolve_paths(config: &mut DashboardConfig, project_dir: &Path) {
    let path = &config.source.path;
    if config.source.source_type == SourceType::DuckDB
        && path != ":memory:"
        && Path::new(path).is_relative()
    {
        config.source.path = project_dir.join(path).to_string_lossy().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_follow_postgres_conventions() -> Result<()> {
        let config = parse_config("source:\n  type: postgres\n")?;
        assert_eq!(config.source.source_type, SourceType::Postgres);
        assert_eq!(config.source.host, "localhost");
        assert_eq!(config.source.port, 5432);
        assert_eq!(config.source.table, "soda_checks.data_quality_checks");
        assert_eq!(config.cache.ttl_seconds, 300);
        assert_eq!(config.target_path, "target");
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let mut config = parse_config("title: QA\n")?;
        apply_env_overrides(&mut config, |key| match key {
            "DQDASH_TABLE" => Some("public.checks".to_string()),
            "DQDASH_PG_PASSWORD" => Some("pw".to_string()),
            _ => None,
        });
        assert_eq!(config.source.table, "public.checks");
        assert_eq!(config.source.password.as_deref(), Some("pw"));
        assert_eq!(config.target_path, "target");
        Ok(())
    }

    #[test]
    fn test_load_resolves_relative_duckdb_path() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("dqdash.yaml"),
            "title: Checks\nsource:\n  type: duckdb\n  path: checks.duckdb\n  table: dq_log\ncache:\n  ttl-seconds: 0\n",
        )?;

        let config = load_dashboard_config(dir.path())?;
        assert_eq!(config.title, "Checks");
        assert_eq!(config.source.table, "dq_log");
        assert_eq!(config.cache.ttl(), Duration::ZERO);
        assert!(Path::new(&config.source.path).starts_with(dir.path()));
        Ok(())
    }

    #[test]
    fn test_missing_config_is_reported() -> Result<()> {
        let dir = tempdir()?;
        let res = load_dashboard_config(dir.path());
        assert!(matches!(res, Err(InfrastructureError::ConfigNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_invalid_port_fails_validation() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("dqdash.yml"), "source:\n  port: 0\n")?;
        let res = load_dashboard_config(dir.path());
        assert!(matches!(res, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }
}
