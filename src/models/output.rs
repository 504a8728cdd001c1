use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Truck,
    Tractor,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Truck => "truck",
            VehicleType::Tractor => "tractor",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector used on the command line (`--output area`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    Area,
    Volume,
    Trips,
    None,
}

/// Measured output of a day's work. Numbers are kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Output {
    #[default]
    None,
    Area {
        #[serde(default, deserialize_with = "number_text")]
        length: String,
        #[serde(default, deserialize_with = "number_text")]
        width: String,
    },
    Volume {
        #[serde(default, deserialize_with = "number_text")]
        length: String,
        #[serde(default, deserialize_with = "number_text")]
        width: String,
        #[serde(default, deserialize_with = "number_text")]
        depth: String,
    },
    Trips {
        #[serde(default)]
        vehicle: Option<VehicleType>,
        #[serde(default, deserialize_with = "number_text")]
        count: String,
    },
}

/// Hand-edited plans may write `count: 3` instead of `count: "3"`.
fn number_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(u64),
        Float(f64),
    }

    Ok(match Raw::deserialize(d)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Output {
    /// Text shown in the Output column.
    ///
    /// Empty when a required number is missing. A trips entry without a
    /// vehicle drops the parenthesised part.
    pub fn render(&self) -> String {
        match self {
            Output::None => String::new(),
            Output::Area { length, width } => {
                if blank(length) || blank(width) {
                    return String::new();
                }
                format!("{}m×{}m", length.trim(), width.trim())
            }
            Output::Volume {
                length,
                width,
                depth,
            } => {
                if blank(length) || blank(width) || blank(depth) {
                    return String::new();
                }
                format!("{}m×{}m×{}m", length.trim(), width.trim(), depth.trim())
            }
            Output::Trips { vehicle, count } => {
                if blank(count) {
                    return String::new();
                }
                match vehicle {
                    Some(v) => format!("{} trips ({})", count.trim(), v),
                    None => format!("{} trips", count.trim()),
                }
            }
        }
    }

    /// Build an output from command-line pieces, checking the numbers.
    pub fn build(
        kind: OutputKind,
        length: Option<&str>,
        width: Option<&str>,
        depth: Option<&str>,
        vehicle: Option<VehicleType>,
        count: Option<&str>,
    ) -> AppResult<Self> {
        let dim = |field: &'static str, v: Option<&str>| -> AppResult<String> {
            let v = v.unwrap_or("").trim().to_string();
            check_dimension(field, &v)?;
            Ok(v)
        };

        Ok(match kind {
            OutputKind::None => Output::None,
            OutputKind::Area => Output::Area {
                length: dim("length", length)?,
                width: dim("width", width)?,
            },
            OutputKind::Volume => Output::Volume {
                length: dim("length", length)?,
                width: dim("width", width)?,
                depth: dim("depth", depth)?,
            },
            OutputKind::Trips => {
                let count = count.unwrap_or("").trim().to_string();
                check_trip_count(&count)?;
                Output::Trips { vehicle, count }
            }
        })
    }
}

// Literal patterns, checked by the tests below.
static DIMENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("dimension pattern"));
static TRIP_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("trip count pattern"));

/// Blank, or a non-negative decimal such as `4`, `2.5`.
pub fn check_dimension(field: &'static str, value: &str) -> AppResult<()> {
    check_pattern(field, value, &DIMENSION)
}

/// Blank, or a whole number of trips.
pub fn check_trip_count(value: &str) -> AppResult<()> {
    check_pattern("trips", value, &TRIP_COUNT)
}

fn check_pattern(field: &'static str, value: &str, re: &Regex) -> AppResult<()> {
    if blank(value) || re.is_match(value.trim()) {
        Ok(())
    } else {
        Err(AppError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}
