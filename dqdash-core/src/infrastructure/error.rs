// dqdash-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(dqdash::infra::database::duckdb),
        help("An error occurred inside the SQL engine.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("DuckDB connection mutex poisoned")]
    #[diagnostic(code(dqdash::infra::database::poisoned))]
    Poisoned,
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(dqdash::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(dqdash::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(dqdash::infra::config))]
    ConfigError(String),

    #[error("Dashboard configuration not found at '{0}'")]
    #[diagnostic(
        code(dqdash::infra::config_missing),
        help("Create a dqdash.yaml in the project directory.")
    )]
    ConfigNotFound(String),

    // --- REPORT ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(code(dqdash::infra::template))]
    TemplateError(#[from] minijinja::Error),

    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(dqdash::infra::json))]
    Json(#[from] serde_json::Error),
}

impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}

// Context-wrapped errors coming out of the config loader
impl From<anyhow::Error> for InfrastructureError {
    fn from(err: anyhow::Error) -> Self {
        InfrastructureError::ConfigError(format!("{:#}", err))
    }
}
