//! Entry-date-dependent retirement age thresholds
//!
//! The fund changed its normal and early retirement ages twice, effective
//! for members whose participation began on or after 1 January 1990 and
//! 1 January 2014. The cutoffs are inclusive-start: entry exactly on
//! 1990-01-01 takes the 62/55 thresholds, not the pre-1990 ones.

use serde::{Deserialize, Serialize};

use crate::dates::CalendarDate;

/// First entry date governed by the 62/55 thresholds
const CUTOFF_1990: (i32, u32, u32) = (1990, 1, 1);
/// First entry date governed by the 65/58 thresholds
const CUTOFF_2014: (i32, u32, u32) = (2014, 1, 1);

/// Retirement age thresholds in whole years, keyed off the entry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeThresholds {
    /// Normal retirement age (unreduced benefit)
    pub normal: u32,
    /// Early retirement age (reduced benefit)
    pub early: u32,
    /// Mandatory age of separation
    pub mandatory: u32,
}

impl AgeThresholds {
    /// Thresholds for a member whose fund participation began on `entry`
    pub fn for_entry_date(entry: CalendarDate) -> Self {
        let mandatory = 65;
        if entry.ymd() < CUTOFF_1990 {
            Self {
                normal: 60,
                early: 55,
                mandatory,
            }
        } else if entry.ymd() < CUTOFF_2014 {
            Self {
                normal: 62,
                early: 55,
                mandatory,
            }
        } else {
            Self {
                normal: 65,
                early: 58,
                mandatory,
            }
        }
    }

    /// String-input wrapper matching the legacy screens: an unparseable
    /// entry date fails both cutoff comparisons and lands in the post-2014
    /// band
    pub fn for_entry_str(entry: &str) -> Self {
        match CalendarDate::parse(entry) {
            Ok(date) => Self::for_entry_date(date),
            Err(_) => Self {
                normal: 65,
                early: 58,
                mandatory: 65,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(entry: &str) -> AgeThresholds {
        AgeThresholds::for_entry_date(CalendarDate::parse(entry).unwrap())
    }

    #[test]
    fn test_pre_1990_entrant() {
        let t = thresholds("31-12-1989");
        assert_eq!((t.normal, t.early, t.mandatory), (60, 55, 65));
    }

    #[test]
    fn test_1990_boundary_is_inclusive_start() {
        // Exactly 1990-01-01 falls in the middle band
        let t = thresholds("1990-01-01");
        assert_eq!((t.normal, t.early), (62, 55));
    }

    #[test]
    fn test_middle_band() {
        let t = thresholds("15-07-2005");
        assert_eq!((t.normal, t.early), (62, 55));
        let t = thresholds("31-12-2013");
        assert_eq!((t.normal, t.early), (62, 55));
    }

    #[test]
    fn test_2014_boundary_and_after() {
        let t = thresholds("2014-01-01");
        assert_eq!((t.normal, t.early), (65, 58));
        let t = thresholds("01-01-2015");
        assert_eq!((t.normal, t.early), (65, 58));
    }

    #[test]
    fn test_unparseable_entry_falls_to_latest_band() {
        let t = AgeThresholds::for_entry_str("not-a-date");
        assert_eq!((t.normal, t.early), (65, 58));
    }
}
