// dqdash-core/src/application/views.rs

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::domain::check::{
    Dataset, FilterSelection, GroupedFailures, ResultRow, Summary, apply_filters, failure_trend,
    failures_by_check, failures_by_table, project_results, summarize,
};

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    #[serde(skip)]
    pub filtered: Dataset,
    pub summary: Summary,
    pub by_table: GroupedFailures,
    pub by_check: GroupedFailures,
    pub trend: GroupedFailures,
    pub results: Vec<ResultRow>,
}

/// Filter once, then run the four independent derivations on the result.
#[instrument(skip(dataset), fields(rows = dataset.len()))]
pub fn derive_views(dataset: &Dataset, selection: &FilterSelection) -> DashboardViews {
    let start = Instant::now();
    let filtered = apply_filters(dataset, selection);

    let views = DashboardViews {
        summary: summarize(&filtered),
        by_table: failures_by_table(&filtered),
        by_check: failures_by_check(&filtered),
        trend: failure_trend(&filtered),
        results: project_results(&filtered),
        filtered,
    };

    debug!(
        total = views.summary.total,
        failed = views.summary.failed,
        "Views derived in {:.2?}",
        start.elapsed()
    );
    views
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::check::{CheckRecord, Dimension};
    use anyhow::Result;

    #[test]
    fn test_views_follow_the_selection() -> Result<()> {
        let ds = Dataset::new(vec![
            CheckRecord::new("db1", "orders", "Null Check", "id", "fail", "t1"),
            CheckRecord::new("db1", "orders", "Range Check", "name", "pass", "t1"),
            CheckRecord::new("db2", "users", "Null Check", "email", "fail", "t2"),
        ]);
        let selection = FilterSelection::all().with(Dimension::TableName, "orders")?;

        let views = derive_views(&ds, &selection);
        assert_eq!(views.filtered.len(), 2);
        assert_eq!(views.summary.rate, "50.0%");
        assert_eq!(views.by_table.get("orders"), Some(1));
        assert_eq!(views.by_table.get("users"), None);
        assert_eq!(views.by_check.len(), 1);
        assert_eq!(views.trend.get("t1"), Some(1));
        assert_eq!(views.results.len(), 2);
        Ok(())
    }
}
