// dqdash-core/src/domain/check/record.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::error::DomainError;

/// Canonical (lower-case) outcome values. Sources normalize on ingestion.
pub const OUTCOME_FAIL: &str = "fail";
pub const OUTCOME_PASS: &str = "pass";

/// Outcomes are stored lower-case and trimmed ("FAIL " -> "fail").
pub fn normalize_outcome(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One logged execution of a data-quality check.
///
/// Every attribute is optional: the log table is nullable and a missing value
/// must never break filtering or aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckRecord {
    pub data_source: Option<String>,
    pub table_name: Option<String>,
    pub check_name: Option<String>,
    pub column_name: Option<String>,
    pub outcome: Option<String>,
    pub timestamp: Option<String>,
}

impl CheckRecord {
    /// Fully populated record. Mostly used by fixtures and tests.
    pub fn new(
        data_source: &str,
        table_name: &str,
        check_name: &str,
        column_name: &str,
        outcome: &str,
        timestamp: &str,
    ) -> Self {
        Self {
            data_source: Some(data_source.to_string()),
            table_name: Some(table_name.to_string()),
            check_name: Some(check_name.to_string()),
            column_name: Some(column_name.to_string()),
            outcome: Some(outcome.to_string()),
            timestamp: Some(timestamp.to_string()),
        }
    }

    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::DataSource => self.data_source.as_deref(),
            Dimension::TableName => self.table_name.as_deref(),
            Dimension::CheckName => self.check_name.as_deref(),
            Dimension::ColumnName => self.column_name.as_deref(),
            Dimension::Outcome => self.outcome.as_deref(),
            Dimension::Timestamp => self.timestamp.as_deref(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.as_deref() == Some(OUTCOME_FAIL)
    }
}

/// Columns of the check log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    DataSource,
    TableName,
    CheckName,
    ColumnName,
    Outcome,
    Timestamp,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::DataSource,
        Dimension::TableName,
        Dimension::CheckName,
        Dimension::ColumnName,
        Dimension::Outcome,
        Dimension::Timestamp,
    ];

    /// The four dimensions exposed as selectors.
    pub const FILTERABLE: [Dimension; 4] = [
        Dimension::DataSource,
        Dimension::TableName,
        Dimension::Outcome,
        Dimension::Timestamp,
    ];

    /// Column name in the log table.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::DataSource => "data_source",
            Dimension::TableName => "table_name",
            Dimension::CheckName => "check_name",
            Dimension::ColumnName => "column_name",
            Dimension::Outcome => "outcome",
            Dimension::Timestamp => "timestamp",
        }
    }

    /// Header used in result tables.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::DataSource => "Data Source",
            Dimension::TableName => "Table Name",
            Dimension::CheckName => "Check Name",
            Dimension::ColumnName => "Column Name",
            Dimension::Outcome => "Outcome",
            Dimension::Timestamp => "Timestamp",
        }
    }

    pub fn is_filterable(self) -> bool {
        Self::FILTERABLE.contains(&self)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Dimension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // "schema" and "table" are the selector captions on the dashboard
            "data_source" | "schema" => Ok(Dimension::DataSource),
            "table_name" | "table" => Ok(Dimension::TableName),
            "check_name" => Ok(Dimension::CheckName),
            "column_name" => Ok(Dimension::ColumnName),
            "outcome" => Ok(Dimension::Outcome),
            "timestamp" => Ok(Dimension::Timestamp),
            _ => Err(DomainError::UnknownDimension(s.to_string())),
        }
    }
}

/// Immutable snapshot of the check log.
///
/// Records live behind an `Arc`, so clones are cheap and every derived view
/// is a new `Dataset` rather than an in-place edit.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[CheckRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<CheckRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when both datasets point at the same snapshot.
    pub fn shares_storage_with(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.records() == other.records()
    }
}

impl Eq for Dataset {}

impl FromIterator<CheckRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = CheckRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CheckRecord;
    type IntoIter = std::slice::Iter<'a, CheckRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
