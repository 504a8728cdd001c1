pub mod attach;
pub mod catalog;
pub mod config;
pub mod day;
pub mod generate;
pub mod init;
pub mod new;
pub mod set;
pub mod show;
pub mod week;

use crate::errors::AppResult;
use crate::models::WeekPlan;
use crate::ui::messages::success;
use std::path::Path;

/// Shared by the editing commands: save the new plan and say so.
pub(crate) fn save_plan(plan: &WeekPlan, file: &str, what: &str) -> AppResult<()> {
    plan.save(Path::new(file))?;
    success(format!("{what} ({file})"));
    Ok(())
}
