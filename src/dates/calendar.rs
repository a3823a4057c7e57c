//! Calendar date value type and the dual-format date parser
//!
//! Member records carry dates as strings in either `DD-MM-YYYY` (the fund's
//! display format) or `YYYY-MM-DD` (the persisted format). The two are
//! disambiguated by whether the first segment has four digits.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a member-supplied date string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected 3 date segments, found {0}")]
    SegmentCount(usize),

    #[error("non-numeric date segment: {0:?}")]
    NonNumeric(String),

    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

/// A validated Gregorian calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from year/month/day components
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateParseError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateParseError::OutOfRange { year, month, day })
    }

    /// Parse a `DD-MM-YYYY` or `YYYY-MM-DD` string
    ///
    /// A 4-digit first segment selects year-first order; everything else is
    /// read day-first, matching the legacy input handling.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let segments: Vec<&str> = input.trim().split('-').collect();
        if segments.len() != 3 {
            return Err(DateParseError::SegmentCount(segments.len()));
        }

        let mut parts = [0i32; 3];
        for (i, segment) in segments.iter().enumerate() {
            parts[i] = segment
                .parse::<i32>()
                .map_err(|_| DateParseError::NonNumeric(segment.to_string()))?;
        }

        let (year, month, day) = if segments[0].len() == 4 {
            (parts[0], parts[1], parts[2])
        } else {
            (parts[2], parts[1], parts[0])
        };

        if month <= 0 || day <= 0 {
            return Err(DateParseError::OutOfRange {
                year,
                month: month.max(0) as u32,
                day: day.max(0) as u32,
            });
        }

        Self::from_ymd(year, month as u32, day as u32)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of year, 1-indexed
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Components as a comparable (year, month, day) triple
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    /// Last calendar day of this date's month
    pub fn month_end(&self) -> CalendarDate {
        Self::month_end_of(self.year(), self.month()).unwrap_or(*self)
    }

    /// Last calendar day of the given month, if the month is representable
    pub fn month_end_of(year: i32, month: u32) -> Option<CalendarDate> {
        NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).map(Self)
    }

    /// Format as `DD-MM-YYYY`, the fund's display format
    pub fn format_dmy(&self) -> String {
        format!("{:02}-{:02}-{:04}", self.day(), self.month(), self.year())
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_dmy())
    }
}

/// Number of days in a calendar month, leap years included
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    // First of the following month, stepped back one day.
    // The fallback is unreachable for dates the parser accepts.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}
