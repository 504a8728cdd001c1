use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::GenerateLogic;
use crate::errors::AppResult;
use crate::models::WeekPlan;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate { file, out, force } = cmd {
        let plan = WeekPlan::load(Path::new(file))?;
        GenerateLogic::generate(&plan, cfg, out.as_deref(), *force)?;
    }
    Ok(())
}
