// Super Tabs Toolbar
// Terminal demo of a tab toolbar with a sliding selection indicator

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use super_tabs_toolbar::{load_and_validate_config, ui, App, LOG_FILE_ENV};

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    // Optional config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_and_validate_config(config_path).context("failed to load toolbar configuration")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(&config, Rect::new(0, 0, size.width, size.height));
    tracing::info!(tabs = app.tabs.len(), "toolbar mounted");

    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Send logs to the file named by `SUPER_TABS_LOG`; stay silent otherwise
///
/// The terminal belongs to the UI, so nothing is ever written to stdout.
fn init_logging() -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("failed to create log file {:?}", path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
