//! Retirement date derivation
//!
//! The fund separates members on the last calendar day of the month in
//! which they attain the relevant age. A member born on the first of a
//! month is treated as attaining the age one month earlier — the
//! threshold month shifts back before taking month-end. That shift is
//! fund policy, reproduced as-is.

use serde::{Deserialize, Serialize};

use super::calendar::CalendarDate;
use crate::rules::AgeThresholds;

/// The three derived separation dates for a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementDates {
    /// Mandatory age of separation
    pub mandatory: CalendarDate,
    /// Normal retirement age date (unreduced benefit)
    pub normal: CalendarDate,
    /// Early retirement age date (reduced benefit)
    pub early: CalendarDate,
}

impl RetirementDates {
    /// Derive all three dates from a date of birth and the member's
    /// entry-date age thresholds
    pub fn derive(date_of_birth: CalendarDate, thresholds: AgeThresholds) -> Self {
        // Historical carve-out: members born before 1958-01-01 carry the
        // fixed mandatory separation date of 31 December 1958.
        let mandatory = if date_of_birth.year() < 1958 {
            CalendarDate::from_ymd(1958, 12, 31).unwrap_or(date_of_birth)
        } else {
            age_attainment_month_end(date_of_birth, thresholds.mandatory)
        };

        Self {
            mandatory,
            normal: age_attainment_month_end(date_of_birth, thresholds.normal),
            early: age_attainment_month_end(date_of_birth, thresholds.early),
        }
    }
}

/// Last calendar day of the month in which a member attains `age`
///
/// First-of-month birthdays shift back one month before month-end is taken.
pub fn age_attainment_month_end(date_of_birth: CalendarDate, age: u32) -> CalendarDate {
    let mut year = date_of_birth.year() + age as i32;
    let mut month = date_of_birth.month();

    if date_of_birth.day() == 1 {
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }

    // Unreachable fallback: year + age stays within chrono's range for any
    // date the parser accepts.
    CalendarDate::month_end_of(year, month).unwrap_or(date_of_birth)
}
