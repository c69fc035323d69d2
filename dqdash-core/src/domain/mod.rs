pub mod check;
pub mod error;
pub mod table_ref;

// Re-exports to keep imports short elsewhere
pub use check::{CheckRecord, Dataset, Dimension, FilterSelection, WILDCARD};
pub use error::DomainError;
pub use table_ref::TableRef;
