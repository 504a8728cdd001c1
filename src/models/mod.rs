pub mod choice;
pub mod day_record;
pub mod department;
pub mod division;
pub mod output;
pub mod week_plan;

pub use choice::Choice;
pub use day_record::{DAYS_IN_WEEK, DayPatch, DayRecord, WeekDays};
pub use department::Department;
pub use division::Division;
pub use output::{Output, OutputKind, VehicleType};
pub use week_plan::WeekPlan;
