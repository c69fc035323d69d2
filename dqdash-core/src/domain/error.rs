// dqdash-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Unknown dimension '{0}'")]
    #[diagnostic(
        code(dqdash::domain::dimension),
        help("Filterable dimensions are: data_source, table_name, outcome, timestamp.")
    )]
    UnknownDimension(String),

    #[error("Dimension '{0}' cannot be used as a filter")]
    #[diagnostic(code(dqdash::domain::not_filterable))]
    NotFilterable(String),

    #[error("Invalid table name '{name}': {reason}")]
    #[diagnostic(
        code(dqdash::domain::table_name),
        help("Use a plain or schema-qualified identifier, e.g. soda_checks.data_quality_checks")
    )]
    InvalidTableName { name: String, reason: String },
}
