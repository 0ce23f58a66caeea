mod app;
mod charts;
mod cli;
mod config;
mod error;
mod header;
mod layout;
mod logging;
mod model;
mod nav;
mod renderer;
mod seed;
mod select;
mod tasks;
mod theme;

use clap::Parser;

use crate::config::Settings;
use crate::error::Error;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Before settings, so config fallbacks are logged.
    logging::init()?;
    let settings = Settings::resolve(&cli)?;
    tracing::debug!(?settings, "settings resolved");

    // Handle --snapshot mode
    if let Some(ref size) = cli.snapshot {
        handle_snapshot(settings, size)?;
        return Ok(());
    }

    // Normal interactive mode
    let (columns, _) = crossterm::terminal::size()?;
    let mut app = app::App::new(settings, columns);
    app.run()?;

    Ok(())
}

/// Draw a single frame into an off-screen buffer and print it as plain text.
fn handle_snapshot(settings: Settings, size: &str) -> anyhow::Result<()> {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    let (columns, rows) =
        cli::parse_size(size).ok_or_else(|| Error::InvalidSnapshotSize(size.to_string()))?;

    let app = app::App::new(settings, columns);
    let mut terminal = Terminal::new(TestBackend::new(columns, rows))?;
    terminal.draw(|frame| renderer::render_ui(frame, &app))?;

    print!("{}", renderer::buffer_to_string(terminal.backend().buffer()));
    Ok(())
}
