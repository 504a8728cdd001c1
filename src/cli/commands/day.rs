use crate::cli::commands::save_plan;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::{Choice, DayPatch, Output, WeekPlan};
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Day {
        file,
        day,
        clear,
        location,
        activity,
        custom_activity,
        output,
        length,
        width,
        depth,
        vehicle,
        trips,
        tools,
        custom_tools,
        comments,
    } = cmd
    {
        let current = WeekPlan::load(Path::new(file))?;

        let output = output
            .map(|kind| {
                Output::build(
                    kind,
                    length.as_deref(),
                    width.as_deref(),
                    depth.as_deref(),
                    *vehicle,
                    trips.as_deref(),
                )
            })
            .transpose()?;

        let patch = DayPatch {
            location: location.clone(),
            activity: choice(activity, custom_activity),
            output,
            tools: choice(tools, custom_tools),
            comments: comments.clone(),
        };

        if patch.is_empty() && !*clear {
            warning("Nothing to change for this day");
            return Ok(());
        }

        let base = if *clear {
            current.with_cleared_day(*day)?
        } else {
            current
        };
        let plan = base.with_day(*day, &patch)?;

        save_plan(&plan, file, format!("Day {day} updated").as_str())?;
    }
    Ok(())
}

fn choice(literal: &Option<String>, custom: &Option<String>) -> Option<Choice> {
    match (literal, custom) {
        (_, Some(text)) => Some(Choice::custom(text.trim())),
        (Some(value), None) => Some(Choice::literal(value.trim())),
        (None, None) => None,
    }
}
