//! rWorkplan library root.
//! Exposes the CLI parser, the high-level run() function, the week
//! resolver and the PDF renderer.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Catalog { .. } => cli::commands::catalog::handle(&cli.command),
        Commands::Week { .. } => cli::commands::week::handle(&cli.command),
        Commands::New { .. } => cli::commands::new::handle(&cli.command, cfg),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command),
        Commands::Attach { .. } => cli::commands::attach::handle(&cli.command),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (--conf ha la precedenza)
    let cfg = Config::load(cli.conf.as_deref().map(Path::new))?;

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
