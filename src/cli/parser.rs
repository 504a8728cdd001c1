use crate::models::{DAYS_IN_WEEK, Department, Division, OutputKind, VehicleType};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkplan
/// CLI application to fill in a crew's weekly work plan and print it as PDF
#[derive(Parser)]
#[command(
    name = "rworkplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-plan CLI: record a sanitation crew's week and export it as a printable PDF report",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or shared setups)
    #[arg(global = true, long = "conf", value_name = "FILE")]
    pub conf: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List divisions, departments and each department's activities and tools
    Catalog {
        #[arg(long, help = "Only show this department")]
        department: Option<Department>,
    },

    /// Show the Sunday-to-Saturday week containing a date
    Week {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Reference date (default: today)")]
        date: Option<String>,

        #[arg(long, help = "Print the week as JSON")]
        json: bool,
    },

    /// Start a new, blank week plan
    New {
        #[arg(long, value_name = "FILE", default_value = "workplan.yaml")]
        file: String,

        #[arg(long)]
        division: Option<Division>,

        #[arg(long)]
        department: Option<Department>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Any day of the reported week")]
        date: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing plan file")]
        force: bool,
    },

    /// Change the plan's division, department or reference date
    Set {
        #[arg(long, value_name = "FILE", default_value = "workplan.yaml")]
        file: String,

        #[arg(long)]
        division: Option<Division>,

        #[arg(long)]
        department: Option<Department>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// Fill in or change one day of the plan
    Day {
        #[arg(long, value_name = "FILE", default_value = "workplan.yaml")]
        file: String,

        /// Day of the week: 0-6 (0 = Sunday) or a weekday name
        #[arg(long, value_parser = parse_day_index)]
        day: usize,

        #[arg(long, help = "Blank the day before applying the other options")]
        clear: bool,

        #[arg(long)]
        location: Option<String>,

        #[arg(
            long,
            conflicts_with = "custom_activity",
            help = "Activity from the department's list (see `catalog`)"
        )]
        activity: Option<String>,

        #[arg(long = "custom-activity", help = "Free-text activity")]
        custom_activity: Option<String>,

        #[arg(long, value_enum, help = "Kind of output measured for the day")]
        output: Option<OutputKind>,

        #[arg(long, requires = "output", help = "Length in metres")]
        length: Option<String>,

        #[arg(long, requires = "output", help = "Width in metres")]
        width: Option<String>,

        #[arg(long, requires = "output", help = "Depth or height in metres")]
        depth: Option<String>,

        #[arg(long, value_enum, requires = "output")]
        vehicle: Option<VehicleType>,

        #[arg(long, requires = "output", help = "Number of trips")]
        trips: Option<String>,

        #[arg(
            long,
            conflicts_with = "custom_tools",
            help = "Tool from the department's list (see `catalog`)"
        )]
        tools: Option<String>,

        #[arg(long = "custom-tools", help = "Free-text tools")]
        custom_tools: Option<String>,

        #[arg(long)]
        comments: Option<String>,
    },

    /// Record pictures taken during the week (counted, not embedded)
    Attach {
        #[arg(long, value_name = "FILE", default_value = "workplan.yaml")]
        file: String,

        #[arg(required = true, value_name = "PICTURE")]
        pictures: Vec<String>,
    },

    /// Print the plan as a table
    Show {
        #[arg(long, value_name = "FILE", default_value = "workplan.yaml")]
        file: String,
    },

    /// Generate the PDF work-plan report
    Generate {
        #[arg(long, value_name = "FILE", default_value = "workplan.yaml")]
        file: String,

        #[arg(long, value_name = "DIR", help = "Output directory (default from config)")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing report")]
        force: bool,
    },
}

const WEEKDAYS: [&str; DAYS_IN_WEEK] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// `--day` accepts 0-6 or a weekday name / three-letter prefix.
pub fn parse_day_index(s: &str) -> Result<usize, String> {
    let s = s.trim().to_ascii_lowercase();

    if let Ok(n) = s.parse::<usize>() {
        return if n < DAYS_IN_WEEK {
            Ok(n)
        } else {
            Err(format!("day must be between 0 and {}", DAYS_IN_WEEK - 1))
        };
    }

    if s.len() >= 3
        && let Some(i) = WEEKDAYS.iter().position(|d| d.starts_with(&s))
    {
        return Ok(i);
    }

    Err(format!("unknown day '{s}' (use 0-6 or sun..sat)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn conf_override_is_global() {
        let cli = Cli::try_parse_from(["rworkplan", "show", "--conf", "/tmp/rwp.conf"]).unwrap();
        assert_eq!(cli.conf.as_deref(), Some("/tmp/rwp.conf"));

        let cli = Cli::try_parse_from(["rworkplan", "--conf", "a.conf", "week"]).unwrap();
        assert_eq!(cli.conf.as_deref(), Some("a.conf"));

        assert!(Cli::try_parse_from(["rworkplan", "--config", "a.conf", "week"]).is_err());
    }

    #[test]
    fn day_accepts_numbers_and_names() {
        assert_eq!(parse_day_index("0"), Ok(0));
        assert_eq!(parse_day_index("Tue"), Ok(2));
        assert_eq!(parse_day_index("saturday"), Ok(6));
        assert!(parse_day_index("7").is_err());
        assert!(parse_day_index("t").is_err());
        assert!(parse_day_index("funday").is_err());
    }
}
