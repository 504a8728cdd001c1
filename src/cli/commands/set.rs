use crate::cli::commands::save_plan;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::WeekPlan;
use crate::ui::messages::warning;
use crate::utils::date::parse_optional_date;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Set {
        file,
        division,
        department,
        date,
    } = cmd
    {
        let current = WeekPlan::load(Path::new(file))?;
        let date = parse_optional_date(date.as_ref())?;

        if division.is_none() && department.is_none() && date.is_none() {
            warning("Nothing to change: use --division, --department or --date");
            return Ok(());
        }

        let plan = WeekPlan {
            division: division.or(current.division),
            department: department.or(current.department),
            date: date.or(current.date),
            ..current
        };

        // literal choices must still belong to the (new) department
        plan.check_vocabulary()?;
        save_plan(&plan, file, "Week plan updated")?;
    }
    Ok(())
}
