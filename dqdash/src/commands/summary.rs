// dqdash/src/commands/summary.rs
//
// USE CASE: Print the dashboard for one selection.

use std::path::Path;

use crate::cli::SelectionArgs;
use crate::commands::Workspace;
use crate::commands::display::print_views;

pub async fn execute(project_dir: &Path, selection: SelectionArgs, rows: usize) -> anyhow::Result<()> {
    let mut workspace = Workspace::open(project_dir)?;
    println!("📊 {}", workspace.config.title);
    println!("   Source: {}", workspace.source_label());

    let session = workspace.session(selection.to_selection()).await?;
    print_views(session.views(), rows);
    Ok(())
}
