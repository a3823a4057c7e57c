//! Service duration arithmetic in the fund's reckoning
//!
//! Durations are computed by component-wise subtraction with a calendar
//! borrow, then normalized with the fund's fixed 30-day-month rollover.
//! The rollover is an intentional simplification carried over from the
//! scheme rules, not a calendar bug: day counts of 30 or more convert to
//! months at exactly 30 days regardless of the actual month length.

use serde::{Deserialize, Serialize};

use super::calendar::{days_in_month, CalendarDate};

/// Elapsed time between two calendar dates in years/months/days
///
/// Components may be negative when the separation date precedes the entry
/// date; chronological ordering is deliberately not enforced (the caller
/// treats a zero or negative duration as incomplete input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDuration {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl ServiceDuration {
    pub const ZERO: ServiceDuration = ServiceDuration {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Duration expressed as fractional years (months at 1/12, days at 1/365.25)
    ///
    /// This is the service-length figure all accrual, bonus, and reduction
    /// math runs on. Full precision is kept here; rounding is a display
    /// concern.
    pub fn years_as_float(&self) -> f64 {
        self.years as f64 + self.months as f64 / 12.0 + self.days as f64 / 365.25
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl std::fmt::Display for ServiceDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

/// Compute the duration between two dates in the fund's reckoning
pub fn service_between(entry: CalendarDate, separation: CalendarDate) -> ServiceDuration {
    let mut years = separation.year() - entry.year();
    let mut months = separation.month() as i32 - entry.month() as i32;
    let mut days = separation.day() as i32 - entry.day() as i32;

    if days < 0 {
        // Borrow the true calendar length of the month immediately
        // before the separation month.
        months -= 1;
        let (prev_year, prev_month) = if separation.month() == 1 {
            (separation.year() - 1, 12)
        } else {
            (separation.year(), separation.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    // Fixed 30-day rollover (scheme convention, see module docs)
    if days >= 30 {
        months += days / 30;
        days %= 30;
    }
    if months >= 12 {
        years += months / 12;
        months %= 12;
    }

    ServiceDuration { years, months, days }
}

/// Total string-input wrapper: any unparseable date yields a zero duration
///
/// This is the contract the surrounding input screens rely on — a zero
/// duration signals "incomplete input", never an error.
pub fn service_between_strings(entry: &str, separation: &str) -> ServiceDuration {
    match (CalendarDate::parse(entry), CalendarDate::parse(separation)) {
        (Ok(from), Ok(to)) => service_between(from, to),
        _ => ServiceDuration::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_same_date_is_zero() {
        let d = date("15-06-2020");
        assert_eq!(service_between(d, d), ServiceDuration::ZERO);
        assert_eq!(service_between(d, d).years_as_float(), 0.0);
    }

    #[test]
    fn test_whole_years() {
        let duration = service_between(date("01-01-2000"), date("01-01-2025"));
        assert_eq!(
            duration,
            ServiceDuration {
                years: 25,
                months: 0,
                days: 0
            }
        );
        assert_relative_eq!(duration.years_as_float(), 25.0);
    }

    #[test]
    fn test_day_borrow_uses_preceding_month_length() {
        // 20 Jan -> 10 Mar 2020: borrows February's 29 days (leap year)
        let duration = service_between(date("20-01-2020"), date("10-03-2020"));
        assert_eq!(
            duration,
            ServiceDuration {
                years: 0,
                months: 1,
                days: 19
            }
        );

        // Same span in 2021: February has 28 days
        let duration = service_between(date("20-01-2021"), date("10-03-2021"));
        assert_eq!(
            duration,
            ServiceDuration {
                years: 0,
                months: 1,
                days: 18
            }
        );
    }

    #[test]
    fn test_january_separation_borrows_december() {
        let duration = service_between(date("20-12-2019"), date("10-01-2020"));
        assert_eq!(
            duration,
            ServiceDuration {
                years: 0,
                months: 0,
                days: 21
            }
        );
    }

    #[test]
    fn test_thirty_day_rollover() {
        // 1 Feb -> 31 Mar: 30 raw days roll into a month at the fixed
        // 30-day convention
        let duration = service_between(date("01-02-2021"), date("31-03-2021"));
        assert_eq!(
            duration,
            ServiceDuration {
                years: 0,
                months: 2,
                days: 0
            }
        );
    }

    #[test]
    fn test_years_as_float_monotonic_in_separation() {
        let entry = date("15-01-2020");
        let mut prev = f64::NEG_INFINITY;
        // Sweep day by day across a month boundary (incl. leap February)
        for day in 20..=29 {
            let yaf = service_between(entry, date(&format!("{:02}-02-2020", day))).years_as_float();
            assert!(yaf >= prev, "decreased at Feb {}", day);
            prev = yaf;
        }
        for day in 1..=10 {
            let yaf = service_between(entry, date(&format!("{:02}-03-2020", day))).years_as_float();
            assert!(yaf >= prev, "decreased at Mar {}", day);
            prev = yaf;
        }
    }

    #[test]
    fn test_unparseable_input_yields_zero() {
        assert_eq!(
            service_between_strings("garbage", "01-01-2025"),
            ServiceDuration::ZERO
        );
        assert_eq!(
            service_between_strings("01-01-2000", ""),
            ServiceDuration::ZERO
        );
        assert_eq!(service_between_strings("", ""), ServiceDuration::ZERO);
    }

    #[test]
    fn test_mixed_formats_agree() {
        let a = service_between_strings("01-01-2000", "15-07-2024");
        let b = service_between_strings("2000-01-01", "2024-07-15");
        assert_eq!(a, b);
    }

    #[test]
    fn test_reversed_dates_not_rejected() {
        // Chronological ordering is not validated; reversed input produces
        // negative components rather than an error.
        let duration = service_between(date("01-01-2025"), date("01-01-2020"));
        assert_eq!(duration.years, -5);
        assert!(duration.years_as_float() < 0.0);
    }
}
