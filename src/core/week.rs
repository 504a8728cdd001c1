//! Week resolution: Sunday-start 7-day window around a reference date.

use crate::errors::{AppError, AppResult};
use crate::models::DAYS_IN_WEEK;
use crate::utils::date;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    pub reference: NaiveDate,
    /// Sunday → Saturday.
    pub dates: [NaiveDate; DAYS_IN_WEEK],
    pub year: i32,
    pub month_name: String,
    /// "DD-DD", start and end day of month.
    pub day_range: String,
}

impl WeekWindow {
    pub fn start(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn end(&self) -> NaiveDate {
        self.dates[DAYS_IN_WEEK - 1]
    }
}

/// Resolve the week containing `reference`.
///
/// Year and month always come from the Sunday, even when the window runs
/// into the next month or year (a week of 28 Dec - 3 Jan is reported as
/// December of the earlier year).
///
/// Fails with [`AppError::WeekOutOfRange`] when the window would leave the
/// calendar range chrono can represent.
pub fn resolve_week(reference: NaiveDate) -> AppResult<WeekWindow> {
    let out_of_range = || AppError::WeekOutOfRange(reference.to_string());

    let offset = reference.weekday().num_days_from_sunday() as u64;
    let start = reference
        .checked_sub_days(Days::new(offset))
        .ok_or_else(out_of_range)?;
    let end = start
        .checked_add_days(Days::new(DAYS_IN_WEEK as u64 - 1))
        .ok_or_else(out_of_range)?;

    // start..=end is in range, so every step in between is too
    let dates: [NaiveDate; DAYS_IN_WEEK] = std::array::from_fn(|i| {
        start
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(end)
    });

    Ok(WeekWindow {
        reference,
        dates,
        year: start.year(),
        month_name: start.format("%B").to_string(),
        day_range: format!("{:02}-{:02}", start.day(), end.day()),
    })
}

/// Same as [`resolve_week`], defaulting to today.
pub fn resolve_week_or_today(reference: Option<NaiveDate>) -> AppResult<WeekWindow> {
    resolve_week(reference.unwrap_or_else(date::today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Weekday};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn window_starts_on_sunday_for_every_weekday() {
        // 2025-09-14 is a Sunday
        for offset in 0..7 {
            let reference = d(2025, 9, 14) + Duration::days(offset);
            let w = resolve_week(reference).unwrap();
            assert_eq!(w.start(), d(2025, 9, 14), "reference {reference}");
            assert_eq!(w.start().weekday(), Weekday::Sun);
            assert_eq!(
                w.start(),
                reference - Duration::days(reference.weekday().num_days_from_sunday() as i64)
            );
        }
    }

    #[test]
    fn last_day_is_six_days_after_first() {
        let w = resolve_week(d(2025, 9, 17)).unwrap();
        assert_eq!(w.end(), w.start() + Duration::days(6));
        assert_eq!(w.end().weekday(), Weekday::Sat);
        for pair in w.dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn labels_come_from_the_start_date() {
        let w = resolve_week(d(2025, 9, 17)).unwrap();
        assert_eq!(w.year, 2025);
        assert_eq!(w.month_name, "September");
        assert_eq!(w.day_range, "14-20");
    }

    #[test]
    fn month_boundary_keeps_start_month() {
        // Sun 2025-08-31 .. Sat 2025-09-06
        let w = resolve_week(d(2025, 9, 3)).unwrap();
        assert_eq!(w.month_name, "August");
        assert_eq!(w.day_range, "31-06");
    }

    #[test]
    fn year_boundary_keeps_start_year() {
        // Sun 2025-12-28 .. Sat 2026-01-03
        let w = resolve_week(d(2026, 1, 2)).unwrap();
        assert_eq!(w.year, 2025);
        assert_eq!(w.month_name, "December");
        assert_eq!(w.day_range, "28-03");
    }

    #[test]
    fn resolving_twice_gives_the_same_window() {
        let reference = d(2024, 2, 29);
        assert_eq!(resolve_week(reference).unwrap(), resolve_week(reference).unwrap());
    }

    #[test]
    fn first_representable_week_is_rejected() {
        // NaiveDate::MIN is not a Sunday, so its Sunday lies before the range
        assert_ne!(NaiveDate::MIN.weekday(), Weekday::Sun);
        assert!(matches!(
            resolve_week(NaiveDate::MIN),
            Err(AppError::WeekOutOfRange(_))
        ));
    }

    #[test]
    fn last_representable_week_is_rejected() {
        assert_ne!(NaiveDate::MAX.weekday(), Weekday::Sat);
        assert!(matches!(
            resolve_week(NaiveDate::MAX),
            Err(AppError::WeekOutOfRange(_))
        ));
    }

    #[test]
    fn weeks_near_the_limits_that_fit_still_resolve() {
        let sunday = NaiveDate::MIN
            + Duration::days(7 - NaiveDate::MIN.weekday().num_days_from_sunday() as i64);
        let w = resolve_week(sunday + Duration::days(3)).unwrap();
        assert_eq!(w.start(), sunday);

        let saturday = NaiveDate::MAX
            - Duration::days(NaiveDate::MAX.weekday().num_days_from_sunday() as i64 + 1);
        let w = resolve_week(saturday).unwrap();
        assert_eq!(w.end(), saturday);
    }
}
