use crate::cli::parser::Commands;
use crate::core::week::resolve_week_or_today;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::parse_optional_date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Week { date, json } = cmd {
        let week = resolve_week_or_today(parse_optional_date(date.as_ref())?)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&week)?);
            return Ok(());
        }

        header(format!(
            "Week {} {} {}",
            week.day_range, week.month_name, week.year
        ));

        let mut table = Table::new(vec![
            Column::new("#", 1),
            Column::new("Day", 9),
            Column::new("Date", 14),
        ]);
        for (i, d) in week.dates.iter().enumerate() {
            let marker = if *d == week.reference { " ◀" } else { "" };
            table.add_row(vec![
                i.to_string(),
                d.format("%A").to_string(),
                format!("{}{marker}", d.format("%Y-%m-%d")),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
