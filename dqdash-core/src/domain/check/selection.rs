// dqdash-core/src/domain/check/selection.rs

use serde::{Deserialize, Serialize};

use crate::domain::check::record::Dimension;
use crate::domain::error::DomainError;

/// Selector value meaning "no filter on this dimension".
pub const WILDCARD: &str = "all";

pub fn is_wildcard(value: &str) -> bool {
    value.eq_ignore_ascii_case(WILDCARD)
}

/// Current value of the four dashboard selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub data_source: String,
    pub table_name: String,
    pub outcome: String,
    pub timestamp: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            data_source: WILDCARD.to_string(),
            table_name: WILDCARD.to_string(),
            outcome: WILDCARD.to_string(),
            timestamp: WILDCARD.to_string(),
        }
    }
}

impl FilterSelection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::DataSource => Some(&self.data_source),
            Dimension::TableName => Some(&self.table_name),
            Dimension::Outcome => Some(&self.outcome),
            Dimension::Timestamp => Some(&self.timestamp),
            Dimension::CheckName | Dimension::ColumnName => None,
        }
    }

    /// Sets one selector. Returns whether the selection actually changed.
    pub fn set(
        &mut self,
        dimension: Dimension,
        value: impl Into<String>,
    ) -> Result<bool, DomainError> {
        let slot = match dimension {
            Dimension::DataSource => &mut self.data_source,
            Dimension::TableName => &mut self.table_name,
            Dimension::Outcome => &mut self.outcome,
            Dimension::Timestamp => &mut self.timestamp,
            Dimension::CheckName | Dimension::ColumnName => {
                return Err(DomainError::NotFilterable(dimension.to_string()));
            }
        };

        let value = value.into();
        if *slot == value {
            return Ok(false);
        }
        *slot = value;
        Ok(true)
    }

    pub fn with(
        mut self,
        dimension: Dimension,
        value: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.set(dimension, value)?;
        Ok(self)
    }

    /// Non-wildcard selectors, in selector order.
    pub fn active(&self) -> impl Iterator<Item = (Dimension, &str)> + '_ {
        Dimension::FILTERABLE.into_iter().filter_map(|dimension| {
            self.get(dimension)
                .filter(|value| !is_wildcard(value))
                .map(|value| (dimension, value))
        })
    }

    pub fn is_unfiltered(&self) -> bool {
        self.active().next().is_none()
    }
}
