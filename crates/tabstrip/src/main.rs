//! tabstrip - interactive tab control demo
//!
//! Hosts a single tab control filling the terminal. Pages are added and
//! removed from the keyboard; the mouse selects tabs and scrolls the
//! header strip.

mod app;

use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use app::DemoApp;
use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tabstrip_core::{TabControlConfig, TabTheme};
use tracing_subscriber::EnvFilter;

/// Interactive demo of the tabstrip tab control
#[derive(Parser, Debug)]
#[command(name = "tabstrip")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to tabstrip/config.toml in the config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset to use instead of the configured one
    #[arg(long)]
    theme: Option<String>,

    /// Number of pages to start with
    #[arg(long, default_value_t = 6)]
    pages: usize,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    write_config: bool,

    /// Log to this file; the terminal itself is taken by the UI
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    let config_path = cli.config.clone().or_else(TabControlConfig::default_path);
    let mut config = match &config_path {
        Some(path) => TabControlConfig::load_or(path, TabControlConfig::terminal()),
        None => TabControlConfig::terminal(),
    };
    if let Some(name) = &cli.theme {
        config.theme = TabTheme::preset(name).ok_or_else(|| eyre!("unknown theme `{name}`"))?;
    }

    if cli.write_config {
        let path = config_path.ok_or_else(|| eyre!("no config directory on this platform"))?;
        config
            .save(&path)
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = DemoApp::new(&config, cli.pages);
    tracing::info!("starting with {} pages", cli.pages);

    let result = run_app(&mut terminal, &mut app);

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

fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("creating {}", path.display()))?;
    let filter = if verbose {
        EnvFilter::from_default_env()
            .add_directive("tabstrip=debug".parse()?)
            .add_directive("tabstrip_ui=debug".parse()?)
            .add_directive("tabstrip_core=debug".parse()?)
    } else {
        EnvFilter::from_default_env().add_directive("tabstrip=info".parse()?)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .init();
    Ok(())
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut DemoApp) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                // resizes are picked up from the frame size on the next draw
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
