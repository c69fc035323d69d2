// dqdash-core/src/domain/check/aggregate.rs

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::check::record::{Dataset, Dimension};

/// Label shown for a group whose key is missing in the log.
pub const ABSENT_LABEL: &str = "(null)";

// --- SUMMARY ---

/// The three metric cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub failed: usize,
    pub rate: String,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Checks: {} | Total Failed: {} | Failure Rate: {}",
            self.total, self.failed, self.rate
        )
    }
}

pub fn summarize(dataset: &Dataset) -> Summary {
    let total = dataset.len();
    let failed = dataset.iter().filter(|r| r.is_failure()).count();
    Summary {
        total,
        failed,
        rate: failure_rate(failed, total),
    }
}

/// `failed / total` as a percentage with one decimal, "0.0%" for no checks.
pub fn failure_rate(failed: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", failed as f64 / total as f64 * 100.0)
}

// --- GROUPED FAILURES ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub key: Option<String>,
    pub count: usize,
}

impl GroupCount {
    pub fn label(&self) -> &str {
        self.key.as_deref().unwrap_or(ABSENT_LABEL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrder {
    /// Biggest offenders first, ties by ascending key.
    CountDescending,
    /// Lexicographic on the raw key (time buckets).
    KeyAscending,
}

/// Failure counts per distinct value of one dimension, ready for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedFailures {
    pub dimension: Dimension,
    pub key_label: &'static str,
    pub value_label: &'static str,
    pub groups: Vec<GroupCount>,
}

impl GroupedFailures {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Sum of all group counts (equals the number of failing records).
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.groups
            .iter()
            .find(|g| g.key.as_deref() == Some(key))
            .map(|g| g.count)
    }
}

/// Counts failing records per value of `dimension`.
///
/// Missing keys are grouped together (`None` sorts first), so the counts
/// always add up to the number of failures.
pub fn group_failures(dataset: &Dataset, dimension: Dimension, order: GroupOrder) -> Vec<GroupCount> {
    let mut counts: BTreeMap<Option<&str>, usize> = BTreeMap::new();
    for record in dataset.iter().filter(|r| r.is_failure()) {
        *counts.entry(record.get(dimension)).or_insert(0) += 1;
    }

    // BTreeMap iteration is already key-ascending
    let mut groups: Vec<GroupCount> = counts
        .into_iter()
        .map(|(key, count)| GroupCount {
            key: key.map(str::to_owned),
            count,
        })
        .collect();

    if order == GroupOrder::CountDescending {
        // stable: equal counts keep ascending key order
        groups.sort_by(|a, b| b.count.cmp(&a.count));
    }
    groups
}

pub fn failures_by_table(dataset: &Dataset) -> GroupedFailures {
    GroupedFailures {
        dimension: Dimension::TableName,
        key_label: "Table",
        value_label: "Failures",
        groups: group_failures(dataset, Dimension::TableName, GroupOrder::CountDescending),
    }
}

pub fn failures_by_check(dataset: &Dataset) -> GroupedFailures {
    GroupedFailures {
        dimension: Dimension::CheckName,
        key_label: "Check Type",
        value_label: "Failures",
        groups: group_failures(dataset, Dimension::CheckName, GroupOrder::CountDescending),
    }
}

/// Failures per raw timestamp string. No date parsing, no re-bucketing.
pub fn failure_trend(dataset: &Dataset) -> GroupedFailures {
    GroupedFailures {
        dimension: Dimension::Timestamp,
        key_label: "Date",
        value_label: "Failed Checks",
        groups: group_failures(dataset, Dimension::Timestamp, GroupOrder::KeyAscending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::check::record::CheckRecord;

    fn rec(table: &str, check: &str, outcome: &str, ts: &str) -> CheckRecord {
        CheckRecord::new("db1", table, check, "id", outcome, ts)
    }

    fn pairs(view: &GroupedFailures) -> Vec<(&str, usize)> {
        view.groups.iter().map(|g| (g.label(), g.count)).collect()
    }

    #[test]
    fn test_failures_by_table_counts_only_failures() {
        let ds = Dataset::new(vec![
            rec("orders", "Null Check", "fail", "t1"),
            rec("orders", "Null Check", "pass", "t1"),
            rec("users", "Null Check", "fail", "t1"),
        ]);
        assert_eq!(
            pairs(&failures_by_table(&ds)),
            vec![("orders", 1), ("users", 1)]
        );
    }

    #[test]
    fn test_summary_ten_records_three_failed() {
        let mut records = Vec::new();
        for i in 0..10 {
            let outcome = if i < 3 { "fail" } else { "pass" };
            records.push(rec("orders", "Null Check", outcome, "t1"));
        }
        let summary = summarize(&Dataset::new(records));
        assert_eq!(
            summary,
            Summary {
                total: 10,
                failed: 3,
                rate: "30.0%".into()
            }
        );
    }

    #[test]
    fn test_empty_dataset_degrades_to_zero() {
        let ds = Dataset::empty();
        let summary = summarize(&ds);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.rate, "0.0%");
        assert!(failures_by_table(&ds).is_empty());
        assert!(failures_by_check(&ds).is_empty());
        assert!(failure_trend(&ds).is_empty());
    }

    #[test]
    fn test_failure_rate_rounding() {
        assert_eq!(failure_rate(1, 3), "33.3%");
        assert_eq!(failure_rate(2, 3), "66.7%");
        assert_eq!(failure_rate(3, 3), "100.0%");
        assert_eq!(failure_rate(0, 7), "0.0%");
    }

    #[test]
    fn test_summary_display() {
        let ds = Dataset::new(vec![
            rec("orders", "Null Check", "fail", "t1"),
            rec("orders", "Null Check", "pass", "t1"),
        ]);
        insta::assert_snapshot!(
            summarize(&ds).to_string(),
            @"Total Checks: 2 | Total Failed: 1 | Failure Rate: 50.0%"
        );
    }

    #[test]
    fn test_uppercase_outcomes_are_not_failures() {
        let ds = Dataset::new(vec![rec("orders", "Null Check", "FAIL", "t1")]);
        assert_eq!(summarize(&ds).failed, 0);
        assert!(failures_by_table(&ds).is_empty());
    }

    #[test]
    fn test_by_check_sorted_descending_with_key_tiebreak() {
        let ds = Dataset::new(vec![
            rec("a", "Range Check", "fail", "t1"),
            rec("a", "Null Check", "fail", "t1"),
            rec("a", "Format Check", "fail", "t1"),
            rec("a", "Format Check", "fail", "t2"),
            rec("a", "Null Check", "pass", "t2"),
        ]);
        assert_eq!(
            pairs(&failures_by_check(&ds)),
            vec![("Format Check", 2), ("Null Check", 1), ("Range Check", 1)]
        );
    }

    #[test]
    fn test_trend_is_key_ascending() {
        let ds = Dataset::new(vec![
            rec("a", "c", "fail", "2024-04-03"),
            rec("a", "c", "fail", "2024-04-01"),
            rec("a", "c", "fail", "2024-04-03"),
            rec("a", "c", "pass", "2024-04-02"),
        ]);
        let trend = failure_trend(&ds);
        assert_eq!(pairs(&trend), vec![("2024-04-01", 1), ("2024-04-03", 2)]);
        assert_eq!(trend.value_label, "Failed Checks");
    }

    #[test]
    fn test_group_counts_sum_to_failures_and_are_positive() {
        let mut orphan = rec("x", "c", "fail", "t3");
        orphan.table_name = None;
        let ds = Dataset::new(vec![
            rec("orders", "c", "fail", "t1"),
            rec("users", "c", "fail", "t2"),
            rec("users", "c", "pass", "t2"),
            orphan,
        ]);

        let failed = summarize(&ds).failed;
        for view in [failures_by_table(&ds), failures_by_check(&ds), failure_trend(&ds)] {
            assert_eq!(view.total(), failed);
            assert!(view.groups.iter().all(|g| g.count > 0));
        }

        let by_table = failures_by_table(&ds);
        assert_eq!(by_table.groups[0].label(), ABSENT_LABEL);
        assert_eq!(by_table.get("users"), Some(1));
    }

    #[test]
    fn test_aggregations_are_deterministic() {
        let ds = Dataset::new(vec![
            rec("b", "c", "fail", "t1"),
            rec("a", "c", "fail", "t1"),
            rec("c", "c", "fail", "t1"),
        ]);
        let first = failures_by_table(&ds);
        for _ in 0..5 {
            assert_eq!(failures_by_table(&ds), first);
        }
        assert_eq!(pairs(&first), vec![("a", 1), ("b", 1), ("c", 1)]);
    }
}
