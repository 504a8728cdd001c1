use crate::errors::ValidationError;
use crate::models::{Department, Division, WeekPlan};

/// Gate run before any rendering. On failure nothing is produced and the
/// plan is left as it was.
pub fn validate(plan: &WeekPlan) -> Result<(Division, Department), ValidationError> {
    let (division, department) = match (plan.division, plan.department) {
        (Some(div), Some(dep)) => (div, dep),
        (div, dep) => {
            return Err(ValidationError::MissingSelection {
                division: div.is_none(),
                department: dep.is_none(),
            });
        }
    };

    if !plan.days.any_filled() {
        return Err(ValidationError::NoFilledDay);
    }

    Ok((division, department))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choice, DayPatch};

    fn filled_day_patch() -> DayPatch {
        DayPatch {
            location: Some("Market Rd".into()),
            activity: Some(Choice::literal("Street Sweeping")),
            ..Default::default()
        }
    }

    #[test]
    fn missing_division_blocks() {
        let plan = WeekPlan::new(None, Some(Department::Drainage), None);
        assert_eq!(
            validate(&plan),
            Err(ValidationError::MissingSelection {
                division: true,
                department: false
            })
        );
    }

    #[test]
    fn missing_both_is_reported_once() {
        let plan = WeekPlan::default();
        let err = validate(&plan).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing information: please select a division and a department"
        );
    }

    #[test]
    fn empty_week_blocks() {
        let plan = WeekPlan::new(Some(Division::Kawempe), Some(Department::Sweeping), None);
        assert_eq!(validate(&plan), Err(ValidationError::NoFilledDay));
    }

    #[test]
    fn location_without_activity_is_not_enough() {
        let plan = WeekPlan::new(Some(Division::Kawempe), Some(Department::Sweeping), None);
        let patch = DayPatch {
            location: Some("Market Rd".into()),
            ..Default::default()
        };
        let plan = plan.with_day(4, &patch).unwrap();
        assert_eq!(validate(&plan), Err(ValidationError::NoFilledDay));
    }

    #[test]
    fn one_filled_day_passes() {
        let plan = WeekPlan::new(Some(Division::Kawempe), Some(Department::Sweeping), None)
            .with_day(2, &filled_day_patch())
            .unwrap();
        assert_eq!(
            validate(&plan),
            Ok((Division::Kawempe, Department::Sweeping))
        );
    }
}
