//! Coincast TUI — crypto forecast dashboard.
//!
//! Panels:
//! 1. Setup — coin selector and start-date picker
//! 2. History — daily close line chart
//! 3. Forecast 30d — short-horizon estimate with uncertainty band
//! 4. Forecast 365d — long-horizon estimate with uncertainty band
//! 5. Table — merged two-horizon forecast table
//! 6. Help — keyboard reference
//!
//! Flags: `--synthetic` (offline random-walk data), `--config <path>`.

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use coincast_core::data::{PriceProvider, SyntheticProvider, YahooProvider};
use coincast_core::DashboardConfig;

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).context("--config requires a path")?;
            DashboardConfig::from_file(Path::new(path)).map_err(anyhow::Error::msg)?
        }
        None => DashboardConfig::default(),
    };

    let provider: Box<dyn PriceProvider> = if args.iter().any(|a| a == "--synthetic") {
        Box::new(SyntheticProvider::new())
    } else {
        Box::new(YahooProvider::new())
    };

    let mut app = AppState::new(config, provider);
    app.set_status("Pick a coin and start date, then press r to forecast");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick). A run
        //    triggered here blocks until the pipeline finishes.
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
