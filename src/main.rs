//! Reversi - text console and GUI front ends

use std::io;

use anyhow::{anyhow, Result};
use clap::Parser;
use reversi::cli::{Cli, Command};
use reversi::console::Console;
use reversi::ui::ReversiApp;
use reversi::{EngineConfig, Game};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let command = cli.command.unwrap_or_default();
    let config = command.engine_config();
    match command {
        Command::Console { .. } => run_console(config),
        Command::Gui { .. } => run_gui(config),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout
fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_console(config: EngineConfig) -> Result<()> {
    info!(depth = config.depth, "starting console");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(Game::new(config), stdin.lock(), stdout.lock());
    console.run()?;
    Ok(())
}

fn run_gui(config: EngineConfig) -> Result<()> {
    info!(depth = config.depth, "starting gui");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(move |cc| Ok(Box::new(ReversiApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("gui failed: {e}"))
}
