use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Functional crew type. Each one owns a fixed vocabulary of activities
/// and tools offered as literal choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Drainage,
    Sweeping,
    Landscaping,
    #[serde(rename = "Market Cleaning")]
    MarketCleaning,
    Loaders,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Drainage,
        Department::Sweeping,
        Department::Landscaping,
        Department::MarketCleaning,
        Department::Loaders,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Department::Drainage => "Drainage",
            Department::Sweeping => "Sweeping",
            Department::Landscaping => "Landscaping",
            Department::MarketCleaning => "Market Cleaning",
            Department::Loaders => "Loaders",
        }
    }

    pub fn activities(&self) -> &'static [&'static str] {
        match self {
            Department::Drainage => &[
                "Garbage Collection",
                "Desilting",
                "Loading away silt",
                "Channel Clearing",
            ],
            Department::Sweeping => &["Street Sweeping", "Pavement Cleaning", "Debris Collection"],
            Department::Landscaping => &["Grass Cutting", "Tree Pruning", "Planting", "Weeding"],
            Department::MarketCleaning => &["Floor Cleaning", "Waste Collection", "Sanitization"],
            Department::Loaders => &[
                "Material Loading",
                "Waste Transportation",
                "Equipment Moving",
            ],
        }
    }

    pub fn tools(&self) -> &'static [&'static str] {
        match self {
            Department::Drainage => &[
                "Spades",
                "Fork hoes",
                "Hand hoes",
                "Wheelbarrows",
                "Shovels",
            ],
            Department::Sweeping => &["Brooms", "Dustpans", "Wheelbarrows", "Trash bags"],
            Department::Landscaping => &[
                "Lawn mowers",
                "Pruning shears",
                "Rakes",
                "Watering cans",
            ],
            Department::MarketCleaning => &["Mops", "Buckets", "Disinfectants", "Cleaning cloths"],
            Department::Loaders => &["Trucks", "Tractors", "Loading equipment", "Safety gear"],
        }
    }

    /// Find the canonical spelling of `value` in the activity list.
    pub fn find_activity(&self, value: &str) -> Option<&'static str> {
        find_in(self.activities(), value)
    }

    /// Find the canonical spelling of `value` in the tool list.
    pub fn find_tool(&self, value: &str) -> Option<&'static str> {
        find_in(self.tools(), value)
    }
}

fn find_in(list: &'static [&'static str], value: &str) -> Option<&'static str> {
    let wanted = value.trim();
    list.iter().copied().find(|v| v.eq_ignore_ascii_case(wanted))
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the display name ("Market Cleaning") as well as a dashed or
/// squashed form ("market-cleaning", "marketcleaning").
impl FromStr for Department {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = |v: &str| {
            v.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = norm(s);

        Department::ALL
            .iter()
            .copied()
            .find(|d| norm(d.name()) == wanted)
            .ok_or_else(|| AppError::UnknownDepartment(s.to_string()))
    }
}
