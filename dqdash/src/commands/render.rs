// dqdash/src/commands/render.rs
//
// USE CASE: Generate the HTML dashboard.

use std::path::{Path, PathBuf};

use dqdash_core::application::{DashboardArtifact, write_dashboard};

use crate::cli::SelectionArgs;
use crate::commands::Workspace;

pub async fn execute(
    project_dir: &Path,
    selection: SelectionArgs,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("🖼️  Rendering dashboard...");

    let mut workspace = Workspace::open(project_dir)?;
    let session = workspace.session(selection.to_selection()).await?;

    let artifact = DashboardArtifact::from_session(
        &workspace.config.title,
        &workspace.source_label(),
        &session,
    );
    let target_dir = out.unwrap_or_else(|| workspace.target_dir());
    let html_path = write_dashboard(&target_dir, &artifact)?;

    println!(
        "   {} checks, {} failed ({})",
        artifact.summary.total, artifact.summary.failed, artifact.summary.rate
    );
    println!("✨ Dashboard written to {}", html_path.display());
    Ok(())
}
