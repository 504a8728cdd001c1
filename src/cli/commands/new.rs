use crate::cli::commands::save_plan;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::models::WeekPlan;
use crate::utils::date::parse_optional_date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        file,
        division,
        department,
        date,
        force,
    } = cmd
    {
        ensure_writable(Path::new(file), *force)?;

        let plan = WeekPlan::new(
            division.or(cfg.default_division),
            *department,
            parse_optional_date(date.as_ref())?,
        );
        save_plan(&plan, file, "New week plan created")?;
    }
    Ok(())
}
