pub mod generate;
pub mod validate;
pub mod week;

pub use generate::GenerateLogic;
pub use validate::validate;
pub use week::{WeekWindow, resolve_week, resolve_week_or_today};
