//! vitals — a terminal system vitals monitor, written in Rust.
//!
//! Features:
//!   - CPU load, memory, network throughput & disk meters
//!   - One-second polling with 60-sample sparkline history
//!   - Single-interface throughput with implausible-reading rejection
//!   - Deterministic demo mode (no real metrics required)
//!   - htop-style meter bars & key bar
//!
//! Keybindings: Press F1 or '?' for help.

#![allow(dead_code)]

mod app;
mod config;
mod input;
mod system;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use config::VitalsConfig;
use system::collector::Collector;
use system::provider::{MetricsProvider, StubProvider, SysinfoProvider};

/// Seed for demo mode, so every run draws the same waveform.
const DEMO_SEED: u64 = 0x5eed;

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let cfg = VitalsConfig::load();

    let mut app = App::new();
    cfg.apply_to(&mut app);

    let provider: Box<dyn MetricsProvider> = if cfg.synthetic {
        Box::new(StubProvider::new(DEMO_SEED))
    } else {
        Box::new(SysinfoProvider::new(Some(cfg.interface.clone())))
    };
    let mut collector = Collector::new(provider, PathBuf::from(&cfg.disk_path));
    app.source_name = collector.source_name().to_string();

    let mut last_tick = Instant::now();

    // Initial data collection
    collector.refresh(&mut app);

    loop {
        // Draw
        terminal.draw(|f| ui::draw(f, &app))?;

        // Persist settings and leave once quit is requested. The saved
        // interface is the configured one, not the resolved one, so
        // auto-selection stays auto across runs.
        if app.should_quit {
            let _ = VitalsConfig::from_app(&app, &cfg.interface).save();
            return Ok(());
        }

        // Handle events with short timeout for responsiveness
        let timeout = Duration::from_millis(50);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Crossterm can fire Press and Release; only handle Press
                    if key.kind == KeyEventKind::Press {
                        input::handle_input(&mut app, key);
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resize - will be handled on next draw
                }
                _ => {}
            }
        }

        // Check if it's time to refresh system data
        let tick_rate = Duration::from_millis(app.update_interval_ms);
        let now = Instant::now();
        if now.duration_since(last_tick) >= tick_rate {
            last_tick = now;
            collector.refresh(&mut app);
        }
    }
}
