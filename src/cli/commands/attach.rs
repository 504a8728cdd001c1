use crate::cli::commands::save_plan;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::WeekPlan;
use crate::ui::messages::info;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Attach { file, pictures } = cmd {
        let plan = WeekPlan::load(Path::new(file))?.with_pictures(pictures)?;
        save_plan(&plan, file, "Pictures recorded")?;
        info(format!("{} file(s) selected", plan.pictures.len()));
    }
    Ok(())
}
