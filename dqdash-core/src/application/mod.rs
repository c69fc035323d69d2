// dqdash-core/src/application/mod.rs

pub mod loader;
pub mod report;
pub mod session;
pub mod views;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI only needs:
// `use dqdash_core::application::{load_dataset, DashboardSession, write_dashboard};`

pub use loader::{load_dataset, reload_dataset};
pub use report::{DashboardArtifact, render_html, write_dashboard};
pub use session::{DashboardSession, SelectionEvent};
pub use views::{DashboardViews, derive_views};
