// dqdash-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    // --- DOMAIN (selection, dimensions, identifiers) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (database, IO, config) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for DashboardError {
    fn from(err: duckdb::Error) -> Self {
        DashboardError::Infrastructure(InfrastructureError::from(err))
    }
}
