// dqdash-core/src/domain/check/mod.rs

pub mod aggregate;
pub mod filter;
pub mod options;
pub mod projection;
pub mod record;
pub mod selection;

pub use aggregate::{
    GroupCount, GroupOrder, GroupedFailures, Summary, failure_trend, failures_by_check,
    failures_by_table, summarize,
};
pub use filter::apply_filters;
pub use options::{SelectorOptions, selector_options};
pub use projection::{ResultRow, project_results, result_headers};
pub use record::{CheckRecord, Dataset, Dimension, OUTCOME_FAIL, OUTCOME_PASS, normalize_outcome};
pub use selection::{FilterSelection, WILDCARD, is_wildcard};
