// src/export/model.rs

use crate::core::week::WeekWindow;
use crate::models::{DAYS_IN_WEEK, Department, Division, WeekDays};
use serde::Serialize;

pub(crate) const COLUMNS: usize = 8;

/// Table header, left to right.
pub(crate) const HEADERS: [&str; COLUMNS] = [
    "Day",
    "Date",
    "Location",
    "Activities",
    "Output",
    "Tools",
    "Comments",
    "Pictures",
];

/// Share of the printable width taken by each column (sums to 1).
pub(crate) const COLUMN_SHARES: [f32; COLUMNS] = [0.09, 0.08, 0.13, 0.17, 0.13, 0.13, 0.17, 0.10];

/// Letterhead and placeholder text, usually taken from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    pub organization: Option<String>,
    pub tagline: Option<String>,
    pub picture_placeholder: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            organization: None,
            tagline: None,
            picture_placeholder: "See attached".to_string(),
        }
    }
}

/// Everything the PDF shows, as plain strings.
#[derive(Serialize, Clone, Debug)]
pub struct WeekReport {
    pub organization: Option<String>,
    pub tagline: Option<String>,
    pub title: String,
    pub subtitle: String,
    /// Exactly one row per day, Sunday first.
    pub rows: Vec<Vec<String>>,
    pub file_name: String,
}

pub(crate) fn report_title(division: Division, department: Department) -> String {
    format!(
        "{} DIVISION - {} WEEKLY WORK-PLAN AND REPORT",
        division.name().to_uppercase(),
        department.name().to_uppercase()
    )
}

pub(crate) fn report_subtitle(week: &WeekWindow) -> String {
    format!(
        "YEAR: {}   MONTH: {}   WEEK: {}",
        week.year,
        week.month_name.to_uppercase(),
        week.day_range
    )
}

/// `<department>_Work_Plan_<year>_<monthName>_Week_<DD-DD>.pdf`
pub fn file_name(department: Department, week: &WeekWindow) -> String {
    format!(
        "{}_Work_Plan_{}_{}_Week_{}.pdf",
        department.name(),
        week.year,
        week.month_name,
        week.day_range
    )
}

/// Column widths for a table `total` points wide. The last column takes
/// the rounding remainder so the widths add up exactly.
pub(crate) fn column_widths(total: f32) -> [f32; COLUMNS] {
    let mut widths = COLUMN_SHARES.map(|share| total * share);
    let head: f32 = widths[..COLUMNS - 1].iter().sum();
    widths[COLUMNS - 1] = total - head;
    widths
}

pub(crate) fn build_report(
    division: Division,
    department: Department,
    week: &WeekWindow,
    days: &WeekDays,
    style: &ReportStyle,
) -> WeekReport {
    let rows = (0..DAYS_IN_WEEK)
        .map(|i| {
            let date = week.dates[i];
            let day = days.get(i).cloned().unwrap_or_default();
            vec![
                date.format("%A").to_string(),
                date.format("%d.%m").to_string(),
                day.location.trim().to_string(),
                day.activity_text().trim().to_string(),
                day.output.render(),
                day.tools_text().trim().to_string(),
                day.comments.trim().to_string(),
                style.picture_placeholder.clone(),
            ]
        })
        .collect();

    WeekReport {
        organization: style.organization.clone(),
        tagline: style.tagline.clone(),
        title: report_title(division, department),
        subtitle: report_subtitle(week),
        rows,
        file_name: file_name(department, week),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::week::resolve_week;
    use crate::models::{Choice, DayPatch, Output, VehicleType};
    use chrono::NaiveDate;

    fn sample_week() -> WeekWindow {
        resolve_week(NaiveDate::from_ymd_opt(2025, 9, 17).unwrap()).unwrap()
    }

    #[test]
    fn shares_cover_the_whole_width() {
        let total: f32 = COLUMN_SHARES.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);

        let widths = column_widths(762.0);
        let sum: f32 = widths.iter().sum();
        assert!((sum - 762.0).abs() < 1e-3);
        assert!((widths[3] - 762.0 * 0.17).abs() < 1e-3);
    }

    #[test]
    fn file_name_is_deterministic() {
        let week = sample_week();
        assert_eq!(
            file_name(Department::Sweeping, &week),
            "Sweeping_Work_Plan_2025_September_Week_14-20.pdf"
        );
    }

    #[test]
    fn title_is_upper_case() {
        assert_eq!(
            report_title(Division::Kawempe, Department::MarketCleaning),
            "KAWEMPE DIVISION - MARKET CLEANING WEEKLY WORK-PLAN AND REPORT"
        );
        assert_eq!(
            report_subtitle(&sample_week()),
            "YEAR: 2025   MONTH: SEPTEMBER   WEEK: 14-20"
        );
    }

    #[test]
    fn one_row_per_day_even_when_blank() {
        let week = sample_week();
        let days = WeekDays::default()
            .with_day(
                2,
                &DayPatch {
                    location: Some("Market Rd".into()),
                    activity: Some(Choice::literal("Street Sweeping")),
                    output: Some(Output::Trips {
                        vehicle: Some(VehicleType::Truck),
                        count: "3".into(),
                    }),
                    tools: Some(Choice::custom("Brooms and rakes")),
                    ..Default::default()
                },
            )
            .unwrap();

        let report = build_report(
            Division::Kawempe,
            Department::Sweeping,
            &week,
            &days,
            &ReportStyle::default(),
        );

        assert_eq!(report.rows.len(), 7);
        assert_eq!(report.rows[0][0], "Sunday");
        assert_eq!(report.rows[0][1], "14.09");
        assert_eq!(report.rows[6][0], "Saturday");
        assert_eq!(
            report.rows[2],
            vec![
                "Tuesday",
                "16.09",
                "Market Rd",
                "Street Sweeping",
                "3 trips (truck)",
                "Brooms and rakes",
                "",
                "See attached"
            ]
        );

        for (i, row) in report.rows.iter().enumerate() {
            if i == 2 {
                continue;
            }
            assert!(row[2..7].iter().all(|c| c.is_empty()), "row {i} not blank");
            assert_eq!(row[7], "See attached");
        }
    }
}
