// dqdash-core/src/application/report.rs

use chrono::Utc;
use minijinja::{Environment, context};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::application::session::DashboardSession;
use crate::domain::check::{
    Dimension, FilterSelection, GroupedFailures, ResultRow, SelectorOptions, Summary,
    result_headers,
};
use crate::error::DashboardError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

const DASHBOARD_TEMPLATE: &str = include_str!("../../templates/dashboard.html");

// --- DTOs ---
// Exactly what the page displays; also written out as dashboard.json.

#[derive(Debug, Serialize)]
pub struct DashboardArtifact {
    pub generated_at: String,
    pub title: String,
    pub source: String,
    pub selection: FilterSelection,
    pub options: SelectorOptions,
    pub summary: Summary,
    pub charts: DashboardCharts,
    pub results: Vec<ResultRow>,
}

#[derive(Debug, Serialize)]
pub struct DashboardCharts {
    pub by_table: ChartSeries,
    pub by_check: ChartSeries,
    pub trend: ChartSeries,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ChartSeries {
    pub key_label: String,
    pub value_label: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

impl From<&GroupedFailures> for ChartSeries {
    fn from(view: &GroupedFailures) -> Self {
        Self {
            key_label: view.key_label.to_string(),
            value_label: view.value_label.to_string(),
            labels: view.groups.iter().map(|g| g.label().to_string()).collect(),
            values: view.groups.iter().map(|g| g.count).collect(),
        }
    }
}

#[derive(Serialize)]
struct SelectorCard<'a> {
    caption: &'static str,
    value: &'a str,
    choices: usize,
}

impl DashboardArtifact {
    pub fn from_session(title: &str, source: &str, session: &DashboardSession) -> Self {
        let views = session.views();
        Self {
            generated_at: Utc::now().to_rfc3339(),
            title: title.to_string(),
            source: source.to_string(),
            selection: session.selection().clone(),
            options: session.options().clone(),
            summary: views.summary.clone(),
            charts: DashboardCharts {
                by_table: ChartSeries::from(&views.by_table),
                by_check: ChartSeries::from(&views.by_check),
                trend: ChartSeries::from(&views.trend),
            },
            results: views.results.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, InfrastructureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// --- RENDERING ---

pub fn render_html(artifact: &DashboardArtifact) -> Result<String, InfrastructureError> {
    let mut env = Environment::new();
    env.add_template("dashboard.html", DASHBOARD_TEMPLATE)?;

    // `</` inside the inline <script> would close it early
    let charts_json = serde_json::to_string(&artifact.charts)?.replace("</", "<\\/");

    let selectors: Vec<SelectorCard<'_>> = Dimension::FILTERABLE
        .into_iter()
        .map(|dimension| SelectorCard {
            caption: selector_caption(dimension),
            value: artifact.selection.get(dimension).unwrap_or_default(),
            choices: artifact.options.get(dimension).len(),
        })
        .collect();
    let rows: Vec<[&str; 6]> = artifact.results.iter().map(ResultRow::cells).collect();

    let html = env.get_template("dashboard.html")?.render(context! {
        title => &artifact.title,
        source => &artifact.source,
        generated_at => &artifact.generated_at,
        summary => &artifact.summary,
        selectors => selectors,
        headers => result_headers(),
        rows => rows,
        charts_json => charts_json,
    })?;
    Ok(html)
}

fn selector_caption(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::DataSource => "Schema",
        Dimension::TableName => "Table",
        Dimension::Timestamp => "Timestamp",
        Dimension::Outcome => "Outcome",
        other => other.label(),
    }
}

/// Writes `dashboard.json` and `index.html` into `target_dir`.
/// Returns the path of the HTML page.
#[instrument(skip(artifact))]
pub fn write_dashboard(
    target_dir: &Path,
    artifact: &DashboardArtifact,
) -> Result<PathBuf, DashboardError> {
    let json_path = target_dir.join("dashboard.json");
    atomic_write(&json_path, artifact.to_json()?)?;

    let html_path = target_dir.join("index.html");
    atomic_write(&html_path, render_html(artifact)?)?;

    info!(path = %html_path.display(), "Dashboard written");
    Ok(html_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::SelectionEvent;
    use crate::domain::check::{CheckRecord, Dataset};
    use anyhow::Result;
    use tempfile::tempdir;

    fn session() -> DashboardSession {
        DashboardSession::new(Dataset::new(vec![
            CheckRecord::new("db1", "orders", "Null Check", "id", "fail", "2024-04-21 12:30"),
            CheckRecord::new("db1", "orders", "Range Check", "name", "pass", "2024-04-21 12:20"),
            CheckRecord::new("db2", "products", "Null Check", "price", "fail", "2024-04-21 10:50"),
        ]))
    }

    #[test]
    fn test_chart_series_keeps_view_order() {
        let artifact = DashboardArtifact::from_session("DQ", "duckdb::memory:/dq_log", &session());
        assert_eq!(
            artifact.charts.trend,
            ChartSeries {
                key_label: "Date".into(),
                value_label: "Failed Checks".into(),
                labels: vec!["2024-04-21 10:50".into(), "2024-04-21 12:30".into()],
                values: vec![1, 1],
            }
        );
        assert_eq!(artifact.charts.by_table.labels, ["orders", "products"]);
    }

    #[test]
    fn test_html_contains_cards_and_charts() -> Result<()> {
        let artifact = DashboardArtifact::from_session("Quality", "local", &session());
        let html = render_html(&artifact)?;

        assert!(html.contains("<title>Quality</title>"));
        assert!(html.contains("66.7%"));
        assert!(html.contains("Plotly.newPlot('chart-trend'"));
        assert!(html.contains("Latest Check Results"));
        assert!(html.contains("Range Check"));
        Ok(())
    }

    #[test]
    fn test_html_escapes_log_content() -> Result<()> {
        let hostile = "</script><script>alert(1)</script>";
        let session = DashboardSession::new(Dataset::new(vec![CheckRecord::new(
            "db1", hostile, "Null Check", "id", "fail", "t1",
        )]));
        let artifact = DashboardArtifact::from_session("Quality", "local", &session);

        let html = render_html(&artifact)?;
        assert!(!html.contains(hostile));
        Ok(())
    }

    #[test]
    fn test_empty_selection_renders_placeholder_row() -> Result<()> {
        let mut session = session();
        session.handle(SelectionEvent::parse("table_name=ghost")?)?;
        let html = render_html(&DashboardArtifact::from_session("Q", "local", &session))?;
        assert!(html.contains("No checks match the current selection."));
        assert!(html.contains("0.0%"));
        Ok(())
    }

    #[test]
    fn test_write_dashboard_emits_both_files() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("target");
        let artifact = DashboardArtifact::from_session("Q", "local", &session());

        let html_path = write_dashboard(&target, &artifact)?;
        assert_eq!(html_path, target.join("index.html"));
        assert!(html_path.exists());

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(target.join("dashboard.json"))?)?;
        assert_eq!(json["summary"]["total"], 3);
        assert_eq!(json["selection"]["table_name"], "all");
        assert_eq!(json["results"][0]["Table Name"], "orders");
        Ok(())
    }
}
