use crate::cli::parser::Commands;
use crate::core::validate::validate;
use crate::core::week::resolve_week_or_today;
use crate::errors::AppResult;
use crate::models::WeekPlan;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Show { file } = cmd {
        let plan = WeekPlan::load(Path::new(file))?;
        let week = resolve_week_or_today(plan.date)?;

        let label = |v: Option<String>| v.unwrap_or_else(|| "(not selected)".to_string());
        header(format!(
            "{} / {} : week {} {} {}",
            label(plan.division.map(|d| d.to_string())),
            label(plan.department.map(|d| d.to_string())),
            week.day_range,
            week.month_name,
            week.year
        ));

        let mut table = Table::new(vec![
            Column::new("Day", 9),
            Column::new("Date", 5),
            Column::new("Location", 20),
            Column::new("Activity", 22),
            Column::new("Output", 18),
            Column::new("Tools", 18),
            Column::new("Comments", 30),
        ]);

        for (date, day) in week.dates.iter().zip(plan.days.iter()) {
            table.add_row(vec![
                date.format("%A").to_string(),
                date.format("%d.%m").to_string(),
                day.location.clone(),
                day.activity_text().to_string(),
                day.output.render(),
                day.tools_text().to_string(),
                day.comments.clone(),
            ]);
        }
        print!("{}", table.render());
        println!();

        if !plan.pictures.is_empty() {
            info(format!("{} file(s) selected", plan.pictures.len()));
        }

        match validate(&plan) {
            Ok(_) => success("Ready to generate"),
            Err(e) => warning(e),
        }
    }
    Ok(())
}
