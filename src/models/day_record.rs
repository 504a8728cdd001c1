use crate::errors::{AppError, AppResult};
use crate::models::choice::{Choice, resolve_opt};
use crate::models::output::Output;
use serde::{Deserialize, Serialize};

pub const DAYS_IN_WEEK: usize = 7;

/// What the crew did on one calendar day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayRecord {
    pub location: String,
    pub activity: Option<Choice>,
    pub output: Output,
    pub tools: Option<Choice>,
    pub comments: String,
}

impl DayRecord {
    pub fn activity_text(&self) -> &str {
        resolve_opt(&self.activity)
    }

    pub fn tools_text(&self) -> &str {
        resolve_opt(&self.tools)
    }

    /// A day counts for the report once it has a place and an activity.
    pub fn is_filled(&self) -> bool {
        !self.location.trim().is_empty() && !self.activity_text().trim().is_empty()
    }
}

/// Field-level edit of a day. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct DayPatch {
    pub location: Option<String>,
    pub activity: Option<Choice>,
    pub output: Option<Output>,
    pub tools: Option<Choice>,
    pub comments: Option<String>,
}

impl DayPatch {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.activity.is_none()
            && self.output.is_none()
            && self.tools.is_none()
            && self.comments.is_none()
    }

    pub fn apply(&self, day: &DayRecord) -> DayRecord {
        DayRecord {
            location: self.location.clone().unwrap_or_else(|| day.location.clone()),
            activity: self.activity.clone().or_else(|| day.activity.clone()),
            output: self.output.clone().unwrap_or_else(|| day.output.clone()),
            tools: self.tools.clone().or_else(|| day.tools.clone()),
            comments: self.comments.clone().unwrap_or_else(|| day.comments.clone()),
        }
    }
}

/// The seven days of a plan, index 0 being the window's Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekDays([DayRecord; DAYS_IN_WEEK]);

impl WeekDays {
    pub fn new(days: [DayRecord; DAYS_IN_WEEK]) -> Self {
        Self(days)
    }

    pub fn get(&self, index: usize) -> Option<&DayRecord> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayRecord> {
        self.0.iter()
    }

    /// Copy of the week with day `index` patched. `self` is left untouched.
    pub fn with_day(&self, index: usize, patch: &DayPatch) -> AppResult<Self> {
        let current = self.get(index).ok_or(AppError::InvalidDayIndex(index))?;
        let mut days = self.0.clone();
        days[index] = patch.apply(current);
        Ok(Self(days))
    }

    /// Copy of the week with day `index` reset to blank.
    pub fn cleared(&self, index: usize) -> AppResult<Self> {
        if index >= DAYS_IN_WEEK {
            return Err(AppError::InvalidDayIndex(index));
        }
        let mut days = self.0.clone();
        days[index] = DayRecord::default();
        Ok(Self(days))
    }

    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_filled()).count()
    }

    pub fn any_filled(&self) -> bool {
        self.filled_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::output::VehicleType;

    fn patch_location(loc: &str) -> DayPatch {
        DayPatch {
            location: Some(loc.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn with_day_returns_new_week_and_keeps_original() {
        let week = WeekDays::default();
        let patched = week.with_day(2, &patch_location("Market Rd")).unwrap();

        assert_eq!(patched.get(2).unwrap().location, "Market Rd");
        assert_eq!(week.get(2).unwrap().location, "");
        for i in [0, 1, 3, 4, 5, 6] {
            assert_eq!(patched.get(i), week.get(i));
        }
    }

    #[test]
    fn with_day_out_of_range_fails() {
        let week = WeekDays::default();
        let err = week.with_day(7, &patch_location("x"));
        assert!(matches!(err, Err(AppError::InvalidDayIndex(7))));
    }

    #[test]
    fn patch_keeps_untouched_fields() {
        let day = DayRecord {
            location: "Bwaise".into(),
            activity: Some(Choice::literal("Desilting")),
            output: Output::Trips {
                vehicle: Some(VehicleType::Truck),
                count: "2".into(),
            },
            tools: None,
            comments: "heavy rain".into(),
        };
        let patch = DayPatch {
            tools: Some(Choice::custom("Rope")),
            ..Default::default()
        };
        let out = patch.apply(&day);
        assert_eq!(out.location, "Bwaise");
        assert_eq!(out.tools_text(), "Rope");
        assert_eq!(out.output.render(), "2 trips (truck)");
        assert_eq!(out.comments, "heavy rain");
    }

    #[test]
    fn filled_needs_location_and_activity() {
        let mut day = DayRecord {
            location: "Market Rd".into(),
            ..Default::default()
        };
        assert!(!day.is_filled());

        day.activity = Some(Choice::custom("  "));
        assert!(!day.is_filled());

        day.activity = Some(Choice::literal("Street Sweeping"));
        assert!(day.is_filled());
    }

    #[test]
    fn week_must_have_seven_days_in_yaml() {
        let six = "[{}, {}, {}, {}, {}, {}]";
        assert!(serde_yaml::from_str::<WeekDays>(six).is_err());

        let seven = "[{}, {}, {location: Kalerwe}, {}, {}, {}, {}]";
        let week: WeekDays = serde_yaml::from_str(seven).unwrap();
        assert_eq!(week.get(2).unwrap().location, "Kalerwe");
    }
}
