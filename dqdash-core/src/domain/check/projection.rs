// dqdash-core/src/domain/check/projection.rs

use serde::Serialize;

use crate::domain::check::record::{CheckRecord, Dataset, Dimension};

/// Display columns of the results table, in order.
pub const RESULT_COLUMNS: [Dimension; 6] = Dimension::ALL;

/// One line of the "Latest Check Results" table. Missing values render empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Data Source")]
    pub data_source: String,
    #[serde(rename = "Table Name")]
    pub table_name: String,
    #[serde(rename = "Check Name")]
    pub check_name: String,
    #[serde(rename = "Column Name")]
    pub column_name: String,
    #[serde(rename = "Outcome")]
    pub outcome: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl ResultRow {
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.data_source,
            &self.table_name,
            &self.check_name,
            &self.column_name,
            &self.outcome,
            &self.timestamp,
        ]
    }
}

impl From<&CheckRecord> for ResultRow {
    fn from(record: &CheckRecord) -> Self {
        let cell = |d: Dimension| record.get(d).unwrap_or_default().to_string();
        Self {
            data_source: cell(Dimension::DataSource),
            table_name: cell(Dimension::TableName),
            check_name: cell(Dimension::CheckName),
            column_name: cell(Dimension::ColumnName),
            outcome: cell(Dimension::Outcome),
            timestamp: cell(Dimension::Timestamp),
        }
    }
}

pub fn result_headers() -> [&'static str; 6] {
    RESULT_COLUMNS.map(Dimension::label)
}

pub fn project_results(dataset: &Dataset) -> Vec<ResultRow> {
    dataset.iter().map(ResultRow::from).collect()
}
