//! Unified application error type.
//! All modules (models, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date out of range: the week of {0} does not fit the calendar")]
    WeekOutOfRange(String),

    #[error("Invalid day index: {0} (expected 0 = Sunday .. 6 = Saturday)")]
    InvalidDayIndex(usize),

    #[error("Unknown division: {0}")]
    UnknownDivision(String),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    #[error("Activity '{value}' is not listed for {department}; use --custom-activity")]
    UnknownActivity { department: String, value: String },

    #[error("Tool '{value}' is not listed for {department}; use --custom-tools")]
    UnknownTool { department: String, value: String },

    #[error("Invalid value for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Not an image file: {0}")]
    InvalidPicture(String),

    // ---------------------------
    // Validation gate (before rendering)
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

}

/// The two reasons a plan cannot be turned into a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing information: please select {}", missing_list(.division, .department))]
    MissingSelection { division: bool, department: bool },

    #[error(
        "Missing information: at least one day needs both a location and an activity"
    )]
    NoFilledDay,
}

fn missing_list(division: &bool, department: &bool) -> &'static str {
    match (*division, *department) {
        (true, true) => "a division and a department",
        (true, false) => "a division",
        _ => "a department",
    }
}

pub type AppResult<T> = Result<T, AppError>;
