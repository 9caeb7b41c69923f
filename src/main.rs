use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use snake::clock::Clock;
use snake::config::{GameConfig, default_config_path};
use snake::error::SnakeError;
use snake::game::GameState;
use snake::input::Control;
use snake::logging;
use snake::terminal_runtime::{TerminalWindow, install_panic_hook};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON settings file (defaults to the per-user config path).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ticks per second, overriding the config file.
    #[arg(long = "tick-rate")]
    tick_rate: Option<u32>,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log (defaults to the per-user data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SnakeError> {
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path) {
        eprintln!("Failed to open log file {}: {error}", log_path.display());
    }

    let config = load_config(&cli)?;
    let grid = config.grid();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, seed),
        None => GameState::new(grid),
    };

    install_panic_hook();
    let mut window = TerminalWindow::open(grid)?;
    if let Err(error) = window.set_title(&config.title) {
        warn!(%error, "terminal refused title change");
    }

    info!(
        columns = grid.columns(),
        rows = grid.rows(),
        tick_rate = config.tick_rate,
        "game started"
    );

    let mut clock = Clock::new();
    loop {
        clock.tick(config.tick_rate);

        let events = window.poll_events()?;
        if state.handle_events(events) == Control::Quit {
            break;
        }

        let report = state.step();
        state.draw(&mut window, report);
        window.present()?;
    }

    info!(ticks = state.tick_count, "quit requested");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig, SnakeError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path, true)?,
        None => GameConfig::load(&default_config_path(), false)?,
    };

    if let Some(tick_rate) = cli.tick_rate {
        config.tick_rate = tick_rate;
        config.validate()?;
    }

    Ok(config)
}
