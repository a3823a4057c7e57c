//! Tiered rate-of-accumulation schedule

use serde::{Deserialize, Serialize};

/// Rate-of-accumulation schedule
///
/// Service accrues pension entitlement in banded percentages per year:
/// the first bands at fixed spans, then an open-ended tail whose total
/// contribution is capped, with an overall ceiling on the rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualSchedule {
    /// (years in band, accrual percent per year), applied in order
    pub bands: Vec<(f64, f64)>,

    /// Accrual percent per year beyond the banded spans
    pub tail_rate: f64,

    /// Cap on the tail's total contribution, in percentage points
    pub tail_cap: f64,

    /// Ceiling on the overall rate of accumulation, percent
    pub max_total: f64,
}

impl Default for AccrualSchedule {
    fn default() -> Self {
        Self {
            bands: vec![
                (5.0, 1.5),  // first 5 years
                (5.0, 1.75), // next 5
                (25.0, 2.0), // next 25
            ],
            tail_rate: 1.0, // beyond 35 years
            tail_cap: 3.75,
            max_total: 70.0,
        }
    }
}

impl AccrualSchedule {
    /// Rate of accumulation in percent for a length of contributory service
    ///
    /// Fractional years accrue proportionally within their band.
    pub fn rate_of_accumulation(&self, years_of_service: f64) -> f64 {
        if years_of_service <= 0.0 {
            return 0.0;
        }

        let mut remaining = years_of_service;
        let mut total = 0.0;

        for &(span, rate_per_year) in &self.bands {
            let in_band = remaining.min(span);
            total += in_band * rate_per_year;
            remaining -= in_band;
            if remaining <= 0.0 {
                return total.min(self.max_total);
            }
        }

        total += (remaining * self.tail_rate).min(self.tail_cap);
        total.min(self.max_total)
    }
}
