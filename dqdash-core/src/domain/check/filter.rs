// dqdash-core/src/domain/check/filter.rs

use tracing::debug;

use crate::domain::check::record::{Dataset, Dimension};
use crate::domain::check::selection::FilterSelection;

/// Keeps the records matching every active selector (logical AND).
///
/// Matching is exact and case-sensitive on the record side; a record missing
/// the attribute never matches an active selector on it. When every selector
/// is the wildcard the input snapshot is returned as is.
pub fn apply_filters(dataset: &Dataset, selection: &FilterSelection) -> Dataset {
    let predicates: Vec<(Dimension, &str)> = selection.active().collect();
    if predicates.is_empty() {
        return dataset.clone();
    }

    let filtered: Dataset = dataset
        .iter()
        .filter(|record| {
            predicates
                .iter()
                .all(|(dimension, expected)| record.get(*dimension) == Some(*expected))
        })
        .cloned()
        .collect();

    debug!(
        before = dataset.len(),
        after = filtered.len(),
        predicates = predicates.len(),
        "Filters applied"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::check::record::CheckRecord;
    use anyhow::Result;

    fn fixture() -> Dataset {
        Dataset::new(vec![
            CheckRecord::new("db1", "orders", "Null Check", "id", "fail", "2024-04-21 12:30"),
            CheckRecord::new("db1", "orders", "Range Check", "name", "pass", "2024-04-21 12:20"),
            CheckRecord::new("db2", "products", "Null Check", "price", "fail", "2024-04-21 10:50"),
            CheckRecord::new("db1", "products", "Format Check", "name", "pass", "2024-04-21 10:10"),
            CheckRecord::new("db2", "users", "Format Check", "N/A", "fail", "2024-04-21 08:45"),
        ])
    }

    #[test]
    fn test_all_wildcards_is_identity() {
        let ds = fixture();
        let out = apply_filters(&ds, &FilterSelection::all());
        assert_eq!(out, ds);
        assert!(out.shares_storage_with(&ds));
    }

    #[test]
    fn test_uppercase_wildcard_is_identity() -> Result<()> {
        let ds = fixture();
        let selection = FilterSelection::all().with(Dimension::TableName, "ALL")?;
        assert!(apply_filters(&ds, &selection).shares_storage_with(&ds));
        Ok(())
    }

    #[test]
    fn test_single_table_filter_keeps_exact_count() -> Result<()> {
        let ds = fixture();
        let selection = FilterSelection::all().with(Dimension::TableName, "orders")?;

        let out = apply_filters(&ds, &selection);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.table_name.as_deref() == Some("orders")));
        // input untouched
        assert_eq!(ds.len(), 5);
        Ok(())
    }

    #[test]
    fn test_predicates_are_combined_with_and() -> Result<()> {
        let ds = fixture();
        let selection = FilterSelection::all()
            .with(Dimension::DataSource, "db1")?
            .with(Dimension::Outcome, "pass")?;

        let out = apply_filters(&ds, &selection);
        assert_eq!(out.len(), 2);

        // Every rejected record fails at least one predicate
        for record in ds.iter().filter(|r| !out.records().contains(r)) {
            let ok_source = record.data_source.as_deref() == Some("db1");
            let ok_outcome = record.outcome.as_deref() == Some("pass");
            assert!(!(ok_source && ok_outcome));
        }
        Ok(())
    }

    #[test]
    fn test_value_match_is_case_sensitive() -> Result<()> {
        let ds = fixture();
        let selection = FilterSelection::all().with(Dimension::TableName, "Orders")?;
        assert!(apply_filters(&ds, &selection).is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_attribute_never_matches() -> Result<()> {
        let mut orphan = CheckRecord::new("db1", "orders", "Null Check", "id", "fail", "t");
        orphan.table_name = None;
        let ds = Dataset::new(vec![orphan, CheckRecord::default()]);

        let selection = FilterSelection::all().with(Dimension::TableName, "orders")?;
        assert!(apply_filters(&ds, &selection).is_empty());

        // but a wildcard keeps them
        assert_eq!(apply_filters(&ds, &FilterSelection::all()).len(), 2);
        Ok(())
    }

    #[test]
    fn test_timestamp_filter_is_exact_string() -> Result<()> {
        let ds = fixture();
        let selection = FilterSelection::all().with(Dimension::Timestamp, "2024-04-21 10:50")?;
        let out = apply_filters(&ds, &selection);
        assert_eq!(out.len(), 1);
        assert_eq!(out.records()[0].table_name.as_deref(), Some("products"));
        Ok(())
    }
}
