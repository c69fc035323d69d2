// dqdash-core/src/domain/check/options.rs

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::check::record::{Dataset, Dimension};
use crate::domain::check::selection::WILDCARD;

/// Choices offered by a selector: the wildcard first, then every distinct
/// value present in the dataset, ascending.
pub fn selector_options(dataset: &Dataset, dimension: Dimension) -> Vec<String> {
    let distinct: BTreeSet<&str> = dataset.iter().filter_map(|r| r.get(dimension)).collect();

    let mut options: Vec<String> = distinct.into_iter().map(str::to_owned).collect();
    if !options.iter().any(|o| o == WILDCARD) {
        options.insert(0, WILDCARD.to_string());
    }
    options
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOptions {
    pub data_source: Vec<String>,
    pub table_name: Vec<String>,
    pub outcome: Vec<String>,
    pub timestamp: Vec<String>,
}

impl SelectorOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            data_source: selector_options(dataset, Dimension::DataSource),
            table_name: selector_options(dataset, Dimension::TableName),
            outcome: selector_options(dataset, Dimension::Outcome),
            timestamp: selector_options(dataset, Dimension::Timestamp),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::DataSource => &self.data_source,
            Dimension::TableName => &self.table_name,
            Dimension::Outcome => &self.outcome,
            Dimension::Timestamp => &self.timestamp,
            Dimension::CheckName | Dimension::ColumnName => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::check::record::CheckRecord;

    #[test]
    fn test_options_start_with_wildcard() {
        let ds = Dataset::new(vec![
            CheckRecord::new("db2", "users", "c", "id", "fail", "t1"),
            CheckRecord::new("db1", "orders", "c", "id", "pass", "t1"),
            CheckRecord::new("db1", "orders", "c", "id", "fail", "t2"),
        ]);
        assert_eq!(
            selector_options(&ds, Dimension::DataSource),
            vec!["all", "db1", "db2"]
        );
        assert_eq!(
            selector_options(&ds, Dimension::Outcome),
            vec!["all", "fail", "pass"]
        );
    }

    #[test]
    fn test_existing_all_value_is_not_duplicated() {
        let ds = Dataset::new(vec![
            CheckRecord::new("all", "t", "c", "id", "fail", "t1"),
            CheckRecord::new("db1", "t", "c", "id", "fail", "t1"),
        ]);
        assert_eq!(
            selector_options(&ds, Dimension::DataSource),
            vec!["all", "db1"]
        );
    }

    #[test]
    fn test_empty_dataset_only_offers_wildcard() {
        let options = SelectorOptions::from_dataset(&Dataset::empty());
        for dimension in Dimension::FILTERABLE {
            assert_eq!(options.get(dimension), ["all".to_string()]);
        }
        assert!(options.get(Dimension::CheckName).is_empty());
    }

    #[test]
    fn test_missing_values_are_not_options() {
        let ds = Dataset::new(vec![CheckRecord::default()]);
        assert_eq!(selector_options(&ds, Dimension::TableName), vec!["all"]);
    }
}
