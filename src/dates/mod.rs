//! Calendar dates, service duration arithmetic, and retirement date derivation

mod calendar;
mod duration;
mod retirement;

pub use calendar::{CalendarDate, DateParseError, days_in_month};
pub use duration::{ServiceDuration, service_between, service_between_strings};
pub use retirement::{RetirementDates, age_attainment_month_end};
