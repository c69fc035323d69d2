// dqdash/src/commands/options.rs
//
// USE CASE: List selector choices (distinct values per dimension).

use dqdash_core::domain::check::FilterSelection;
use std::path::Path;

use crate::commands::Workspace;
use crate::commands::display::print_options;

pub async fn execute(project_dir: &Path) -> anyhow::Result<()> {
    let mut workspace = Workspace::open(project_dir)?;
    let session = workspace.session(FilterSelection::all()).await?;

    println!("🎛️  Selector options ({} checks)", session.dataset().len());
    print_options(session.options());
    Ok(())
}
