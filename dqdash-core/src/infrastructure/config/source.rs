// dqdash-core/src/infrastructure/config/source.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where the check log lives.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Table inside a DuckDB database file (or `:memory:`).
    #[default]
    DuckDB,
    /// Remote PostgreSQL table, read through DuckDB's postgres extension.
    Postgres,
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(rename = "type", default)]
    pub source_type: SourceType,

    /// DuckDB database file. For Postgres sources this is the local engine
    /// the remote database gets attached to.
    #[serde(default = "default_path")]
    #[validate(length(min = 1, message = "DuckDB path cannot be empty"))]
    pub path: String,

    #[serde(default = "default_host")]
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    #[serde(default = "default_port")]
    #[validate(range(min = 1, message = "Port must be > 0"))]
    pub port: u16,

    #[serde(default = "default_dbname")]
    pub dbname: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// Check log table, optionally schema-qualified.
    #[serde(default = "default_table")]
    #[validate(length(min = 1, message = "Table name cannot be empty"))]
    pub table: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source_type: SourceType::default(),
            path: default_path(),
            host: default_host(),
            port: default_port(),
            dbname: default_dbname(),
            user: default_user(),
            password: None,
            table: default_table(),
        }
    }
}

impl SourceConfig {
    /// libpq keyword/value connection string handed to `ATTACH`.
    pub fn postgres_dsn(&self) -> String {
        let mut pairs = vec![
            format!("host={}", libpq_value(&self.host)),
            format!("port={}", self.port),
            format!("dbname={}", libpq_value(&self.dbname)),
            format!("user={}", libpq_value(&self.user)),
        ];
        if let Some(password) = &self.password {
            pairs.push(format!("password={}", libpq_value(password)));
        }
        pairs.join(" ")
    }

    /// Stable description of the connection without credentials.
    pub fn fingerprint(&self) -> String {
        match self.source_type {
            SourceType::DuckDB => format!("duckdb:{}", self.path),
            SourceType::Postgres => format!(
                "postgres://{}@{}:{}/{}",
                self.user, self.host, self.port, self.dbname
            ),
        }
    }
}

fn libpq_value(raw: &str) -> String {
    if !raw.is_empty() && !raw.contains([' ', '\'', '\\']) {
        return raw.to_string();
    }
    format!("'{}'", raw.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn default_path() -> String {
    ":memory:".to_string()
}
fn default_host() -> String {
    "localhost".to_string()
}
fn default_port() -> u16 {
    5432
}
fn default_dbname() -> String {
    "mydb".to_string()
}
fn default_user() -> String {
    "myuser".to_string()
}
fn default_table() -> String {
    "soda_checks.data_quality_checks".to_string()
}
