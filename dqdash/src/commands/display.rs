// dqdash/src/commands/display.rs
//
// Terminal rendering of the dashboard views.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use dqdash_core::application::DashboardViews;
use dqdash_core::domain::check::{Dimension, GroupedFailures, SelectorOptions, result_headers};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn summary_table(views: &DashboardViews) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Total Checks", "Total Failed", "Failure Rate"]);
    table.add_row(vec![
        Cell::new(views.summary.total),
        Cell::new(views.summary.failed),
        Cell::new(&views.summary.rate),
    ]);
    table
}

pub fn grouped_table(view: &GroupedFailures) -> Table {
    let mut table = new_table();
    table.set_header(vec![view.key_label, view.value_label]);
    for group in &view.groups {
        table.add_row(vec![Cell::new(group.label()), Cell::new(group.count)]);
    }
    table
}

pub fn results_table(views: &DashboardViews, limit: usize) -> Table {
    let mut table = new_table();
    table.set_header(result_headers().to_vec());
    for row in views.results.iter().take(limit) {
        table.add_row(row.cells().to_vec());
    }
    table
}

pub fn print_views(views: &DashboardViews, limit: usize) {
    println!("\nOverall Quality Summary");
    println!("{}", summary_table(views));

    for (title, view) in [
        ("Failures by Table", &views.by_table),
        ("Failures by Check Type", &views.by_check),
        ("Failure Trend Over Time", &views.trend),
    ] {
        println!("\n{}", title);
        if view.is_empty() {
            println!("   (no failures)");
        } else {
            println!("{}", grouped_table(view));
        }
    }

    println!(
        "\nLatest Check Results ({} of {})",
        views.results.len().min(limit),
        views.results.len()
    );
    println!("{}", results_table(views, limit));
}

pub fn print_options(options: &SelectorOptions) {
    for dimension in Dimension::FILTERABLE {
        println!("{}: {}", dimension, options.get(dimension).join(", "));
    }
}
