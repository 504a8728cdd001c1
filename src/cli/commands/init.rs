use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::PathBuf;

/// Handle the `init` command: write the configuration file with defaults.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli
            .conf
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file);

        if path.exists() && !*force {
            warning(format!(
                "Configuration already present at {} (use --force to reset it)",
                path.display()
            ));
            return Ok(());
        }

        info("Initializing rWorkplan…");
        Config::default().save(&path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
