//! Withdrawal settlement and early-retirement reduction terms

use serde::{Deserialize, Serialize};

/// Terms governing a withdrawal settlement (return of own contributions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalTerms {
    /// Annual compound interest credited on own contributions
    pub annual_interest_rate: f64,

    /// Service length below which no bonus applies
    pub bonus_start_years: f64,

    /// Service length at and beyond which the full bonus applies
    pub bonus_full_years: f64,

    /// Bonus accrued per year of service past `bonus_start_years`
    pub bonus_per_year: f64,

    /// Maximum bonus as a fraction of the base amount
    pub bonus_cap: f64,
}

impl Default for WithdrawalTerms {
    fn default() -> Self {
        Self {
            annual_interest_rate: 0.0325,
            bonus_start_years: 5.0,
            bonus_full_years: 15.0,
            bonus_per_year: 0.10,
            bonus_cap: 1.0,
        }
    }
}

impl WithdrawalTerms {
    /// Service-based bonus as a fraction of the base amount
    pub fn bonus_rate(&self, years_of_service: f64) -> f64 {
        if years_of_service < self.bonus_start_years {
            0.0
        } else if years_of_service > self.bonus_full_years {
            self.bonus_cap
        } else {
            ((years_of_service - self.bonus_start_years) * self.bonus_per_year)
                .min(self.bonus_cap)
        }
    }
}

/// Terms governing the early-retirement actuarial reduction
///
/// The first years short of normal retirement age are charged at a rate
/// tiered on the early retirement age and the length of service; any years
/// beyond the tiered span are charged at a flat residual rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionTerms {
    /// Years to NRA charged at the service-tiered rate
    pub tiered_span_years: f64,

    /// Per-year rate for years to NRA beyond the tiered span
    pub residual_rate: f64,

    /// ERA-55 per-year rates by service band: <25, 25..=30, >30 years
    pub era55_rates: [f64; 3],

    /// ERA-58 per-year rates by service band: <25, >=25 years
    pub era58_rates: [f64; 2],
}

impl Default for ReductionTerms {
    fn default() -> Self {
        Self {
            tiered_span_years: 5.0,
            residual_rate: 0.06,
            era55_rates: [0.06, 0.03, 0.01],
            era58_rates: [0.06, 0.04],
        }
    }
}

impl ReductionTerms {
    /// Per-year reduction rate for the tiered span
    pub fn tier_rate(&self, early_age: u32, years_of_service: f64) -> f64 {
        if early_age == 58 {
            if years_of_service < 25.0 {
                self.era58_rates[0]
            } else {
                self.era58_rates[1]
            }
        } else if years_of_service < 25.0 {
            self.era55_rates[0]
        } else if years_of_service <= 30.0 {
            self.era55_rates[1]
        } else {
            self.era55_rates[2]
        }
    }
}
