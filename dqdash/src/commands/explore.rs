// dqdash/src/commands/explore.rs
//
// USE CASE: Interactive session. Each line on stdin is an event:
//   <dimension>=<value>   change one selector (re-filter + re-aggregate)
//   reset                 back to "all" everywhere
//   refresh               drop the cached fetch and reload the table
//   options | show        print selector choices / current views
//   quit | exit

use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

use dqdash_core::application::{SelectionEvent, reload_dataset};
use dqdash_core::domain::check::FilterSelection;

use crate::commands::Workspace;
use crate::commands::display::{print_options, print_views};

const RESULT_ROWS: usize = 10;

#[derive(Debug, PartialEq)]
enum Input {
    Quit,
    Refresh,
    Show,
    Options,
    Event(String),
}

fn classify(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let input = match line.to_lowercase().as_str() {
        "quit" | "exit" => Input::Quit,
        "refresh" => Input::Refresh,
        "show" => Input::Show,
        "options" => Input::Options,
        _ => Input::Event(line.to_string()),
    };
    Some(input)
}

pub async fn execute(project_dir: &Path) -> anyhow::Result<()> {
    let mut workspace = Workspace::open(project_dir)?;
    let mut session = workspace.session(FilterSelection::all()).await?;

    println!("🔁 {} ({} checks)", workspace.config.title, session.dataset().len());
    println!("   Type <dimension>=<value>, reset, refresh, options, show or quit.");
    print_views(session.views(), RESULT_ROWS);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(input) = classify(&line) else {
            continue;
        };

        match input {
            Input::Quit => break,
            Input::Show => print_views(session.views(), RESULT_ROWS),
            Input::Options => print_options(session.options()),
            Input::Refresh => {
                let dataset = reload_dataset(&workspace.source, &mut workspace.cache).await?;
                session.replace_dataset(dataset);
                println!("🔄 Reloaded {} checks", session.dataset().len());
                print_views(session.views(), RESULT_ROWS);
            }
            Input::Event(raw) => match SelectionEvent::parse(&raw) {
                Ok(event) => match session.handle(event) {
                    Ok(true) => print_views(session.views(), RESULT_ROWS),
                    Ok(false) => println!("   (selection unchanged)"),
                    Err(e) => println!("⚠️  {}", e),
                },
                Err(e) => println!("⚠️  {}", e),
            },
        }
    }

    println!("👋 Bye");
    Ok(())
}
