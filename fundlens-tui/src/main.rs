//! FundLens TUI — startup funding dashboard in the terminal.
//!
//! Layout:
//! - Sidebar: mode selector (Overall Analysis / StartUp / Investor), trend and
//!   match settings, and a filterable name list for the profile modes
//! - Report view: metrics, tables, bar charts and the trend line
//! - Status bar: key hints and the last action
//!
//! Usage: `fundlens-tui [CSV]`. Settings come from `fundlens.toml` in the
//! working directory when present.

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use fundlens_runner::{logging, DashboardConfig, Session};

use crate::app::AppState;

const CONFIG_FILE: &str = "fundlens.toml";

fn main() -> Result<()> {
    // Paths
    let state_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fundlens");
    let state_path = state_dir.join("state.json");
    logging::init_file(&state_dir.join("fundlens-tui.log"), "info")?;

    // Load config and data before touching the terminal so errors print normally.
    let config = load_config(Path::new(CONFIG_FILE), std::env::args().nth(1))?;
    let session = Session::open(config).context("Failed to open funding data")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Build app state and apply persisted state
    let mut app = AppState::new(session);
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        warn!(error = %e, "failed to save UI state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn load_config(path: &Path, data_override: Option<String>) -> Result<DashboardConfig> {
    let mut config = if path.exists() {
        info!(path = %path.display(), "loading config");
        DashboardConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?
    } else {
        DashboardConfig::default()
    };
    if let Some(data) = data_override {
        config.data.path = PathBuf::from(data);
    }
    Ok(config)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
