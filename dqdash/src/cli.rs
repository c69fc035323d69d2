// dqdash/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use dqdash_core::domain::check::{FilterSelection, WILDCARD};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dqdash")]
#[command(about = "Data Quality Dashboard over a check log table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding dqdash.yaml
    #[arg(long, default_value = ".", global = true)]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// The four dashboard selectors. "all" (any case) means no filter.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct SelectionArgs {
    /// Data source / schema
    #[arg(long, default_value = WILDCARD)]
    pub data_source: String,

    /// Checked table
    #[arg(long, default_value = WILDCARD)]
    pub table_name: String,

    /// Check outcome (pass / fail)
    #[arg(long, default_value = WILDCARD)]
    pub outcome: String,

    /// Exact timestamp bucket
    #[arg(long, default_value = WILDCARD)]
    pub timestamp: String,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection {
            data_source: self.data_source.clone(),
            table_name: self.table_name.clone(),
            outcome: self.outcome.clone(),
            timestamp: self.timestamp.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Prints summary cards, failure breakdowns and latest results
    Summary {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Number of result rows to print
        #[arg(long, default_value = "20")]
        rows: usize,
    },

    /// 🎛️  Lists the values offered by each selector
    Options,

    /// 🖼️  Writes the HTML dashboard (index.html + dashboard.json)
    Render {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output directory (defaults to the configured target path)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// 🔁 Interactive session: change selectors from stdin
    Explore,
}
