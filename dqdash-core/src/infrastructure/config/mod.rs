pub mod project;
pub mod source;

pub use project::{CacheConfig, DashboardConfig, load_dashboard_config};
pub use source::{SourceConfig, SourceType};
