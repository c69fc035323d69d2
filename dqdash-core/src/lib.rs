// dqdash-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contract for anything able to hand over the check log (CheckSource).
pub mod ports;

// 2. Domain
// Check records, filter selection, filtering and aggregation.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB / Postgres source, fetch cache, YAML config, atomic writes.
pub mod infrastructure;

// 4. Application (Use Cases)
// Dashboard session, dataset loading, HTML report.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::DashboardError;
